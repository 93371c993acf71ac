//! End-to-end: a two-module row on one shared bus

use std::cell::RefCell;

use alphaseg_core::config::{DisplayConfig, ScrollConfig};
use alphaseg_core::glyph::{encode, DECIMAL_POINT};
use alphaseg_core::AlphaDisplay;
use alphaseg_drivers::Ht16k33;
use alphaseg_hal::{I2cBus, SharedI2c};

#[derive(Default)]
struct RecordingBus {
    writes: Vec<(u8, Vec<u8>)>,
}

impl I2cBus for RecordingBus {
    type Error = ();

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
        self.writes.push((address, data.to_vec()));
        Ok(())
    }
}

#[test]
fn setup_and_print_over_shared_bus() {
    let bus = RefCell::new(RecordingBus::default());
    let windows = Ht16k33::row(SharedI2c::new(&bus), 2);
    let mut display: AlphaDisplay<_, 16> =
        AlphaDisplay::new(windows, &DisplayConfig::new(2)).unwrap();

    display.setup().unwrap();
    {
        let recorded = bus.borrow();
        let writes = &recorded.writes;
        assert_eq!(writes.len(), 8);
        assert_eq!(writes[0], (0x70, vec![0x21]));
        assert_eq!(writes[1], (0x70, vec![0x81]));
        assert_eq!(writes[2], (0x71, vec![0x21]));
        assert_eq!(writes[4], (0x70, vec![0xEF]));
    }
    bus.borrow_mut().writes.clear();

    display.print(0, "3.14 PI").unwrap();

    let recorded = bus.borrow();
    let writes = &recorded.writes;
    assert_eq!(writes.len(), 2);
    let [lo, hi] = (encode(b'3') | DECIMAL_POINT).to_le_bytes();
    assert_eq!(writes[0].0, 0x70);
    assert_eq!(&writes[0].1[..3], &[0x00, lo, hi]);
    // "3." "1" "4" " " | "P" "I" blank blank
    assert_eq!(writes[1].0, 0x71);
    assert_eq!(&writes[1].1[1..3], &encode(b'P').to_le_bytes());
    assert_eq!(&writes[1].1[5..], &[0, 0, 0, 0]);
}

#[test]
fn scrolling_row_moves_one_character_per_step() {
    let bus = RefCell::new(RecordingBus::default());
    let mut config = DisplayConfig::new(1);
    config.scroll = ScrollConfig {
        enabled: true,
        delay_ms: 0,
        dwell_ms: 1000,
        speed_ms: 100,
    };
    let windows = Ht16k33::row(SharedI2c::new(&bus), 1);
    let mut display: AlphaDisplay<_, 32> = AlphaDisplay::new(windows, &config).unwrap();

    display.print(0, "ABCDEF").unwrap();
    bus.borrow_mut().writes.clear();

    assert!(display.tick(100).unwrap());
    assert!(display.tick(200).unwrap());
    // End of message: "CDEF" stays until the dwell expires
    assert!(!display.tick(300).unwrap());

    let recorded = bus.borrow();
    let writes = &recorded.writes;
    assert_eq!(writes.len(), 2);
    assert_eq!(&writes[1].1[1..3], &encode(b'C').to_le_bytes());
}
