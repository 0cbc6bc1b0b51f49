use super::driver::{HD44780Driver, I2cHD44780Driver};
use super::{TextDisplay, row_offset};
use crate::{I2cTransport, LcdError, LcdResult};

// Expander wire format under test; mirrors the backpack pinout.
const RS: u8 = 0b0000_0001;
const ENABLE: u8 = 0b0000_0100;
const BACKLIGHT: u8 = 0b0000_1000;

#[derive(Debug, Default)]
struct FakeBus {
    written: Vec<u8>,
    fail_after: Option<usize>,
}

impl I2cTransport for FakeBus {
    fn write_byte(&mut self, value: u8) -> LcdResult<()> {
        if let Some(limit) = self.fail_after {
            if self.written.len() >= limit {
                return Err(LcdError::Transport(std::io::ErrorKind::TimedOut));
            }
        }
        self.written.push(value);
        Ok(())
    }
}

fn strobe_writes(transaction: u8, backlight: u8) -> [u8; 2] {
    [transaction | ENABLE | backlight, transaction | backlight]
}

/// The four expander writes a full byte expands into: high nibble strobe,
/// then low nibble strobe.
fn byte_writes(byte: u8, rs: bool, backlight_on: bool) -> Vec<u8> {
    let backlight = if backlight_on { BACKLIGHT } else { 0 };
    let select = if rs { RS } else { 0 };
    let mut writes = Vec::new();
    writes.extend(strobe_writes((byte & 0xF0) | select, backlight));
    writes.extend(strobe_writes(((byte << 4) & 0xF0) | select, backlight));
    writes
}

/// Replays captured expander writes the way the controller samples them:
/// each enable-high write presents a nibble, consecutive nibbles pair up
/// high-then-low. Returns the reassembled bytes with their RS flag.
fn latched_bytes(writes: &[u8]) -> Vec<(u8, bool)> {
    let nibbles: Vec<u8> = writes.iter().copied().filter(|w| w & ENABLE != 0).collect();
    assert!(nibbles.len() % 2 == 0, "dangling nibble transaction");
    nibbles
        .chunks_exact(2)
        .map(|pair| ((pair[0] & 0xF0) | (pair[1] >> 4), pair[0] & RS != 0))
        .collect()
}

/// An initialized driver with the init traffic already drained.
fn ready_driver() -> I2cHD44780Driver<FakeBus> {
    let mut lcd = I2cHD44780Driver::new(FakeBus::default());
    lcd.init(true, false).unwrap();
    lcd.bus_mut().written.clear();
    lcd
}

#[test]
fn init_emits_documented_reset_sequence() {
    let mut lcd = I2cHD44780Driver::new(FakeBus::default());
    lcd.init(true, false).unwrap();

    // Triple 8-bit sync, commit to 4-bit, then function set (4-bit, 2-line,
    // 5x8), display on, clear, left-to-right entry.
    let expected: Vec<u8> = [0x33, 0x33, 0x33, 0x32, 0x28, 0x0C, 0x01, 0x06]
        .iter()
        .flat_map(|b| byte_writes(*b, false, true))
        .collect();
    assert_eq!(lcd.bus_mut().written, expected);
}

#[test]
fn every_byte_value_survives_nibble_encoding() {
    let mut lcd = ready_driver();
    for value in 0..=255u8 {
        lcd.send_data(value).unwrap();
    }

    let latched = latched_bytes(&lcd.into_bus().written);
    let expected: Vec<(u8, bool)> = (0..=255u8).map(|value| (value, true)).collect();
    assert_eq!(latched, expected);
}

#[test]
fn row_offsets_match_panel_layout() {
    assert_eq!(row_offset(1), 0x00);
    assert_eq!(row_offset(2), 0x40);
    assert_eq!(row_offset(3), 0x14);
    assert_eq!(row_offset(4), 0x54);
    // Unknown rows fall back to the first row.
    assert_eq!(row_offset(0), 0x00);
    assert_eq!(row_offset(5), 0x00);
    assert_eq!(row_offset(255), 0x00);
}

#[test]
fn set_cursor_adds_column_to_row_base() {
    let mut lcd = ready_driver();
    lcd.set_cursor(3, 7).unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(latched, vec![(0x80 | (0x14 + 7), false)]);
}

#[test]
fn set_cursor_rejects_unaddressable_cells() {
    let mut lcd = ready_driver();
    assert_eq!(lcd.set_cursor(1, 130), Err(LcdError::InvalidArgument));
    assert_eq!(lcd.set_cursor(2, 200), Err(LcdError::InvalidArgument));
}

#[test]
fn glyph_load_addresses_slot_and_writes_eight_rows() {
    let bell = [0x04, 0x0E, 0x0E, 0x0E, 0x1F, 0x00, 0x04, 0x00];
    let mut lcd = ready_driver();
    lcd.load_glyph(2, &bell).unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(latched[0], (0x40 | 2 * 8, false));
    let rows: Vec<(u8, bool)> = bell.iter().map(|row| (*row, true)).collect();
    assert_eq!(&latched[1..], &rows[..]);
}

#[test]
fn glyph_slot_wraps_modulo_eight() {
    let glyph = [0x1F; 8];
    let mut lcd = ready_driver();
    lcd.load_glyph(10, &glyph).unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(latched[0], (0x40 | 2 * 8, false));
}

#[test]
fn bulk_glyph_load_fills_slots_in_order() {
    let first = [0x0A; 8];
    let second = [0x15; 8];
    let mut lcd = ready_driver();
    lcd.load_glyphs(&[first, second]).unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(latched[0], (0x40, false));
    assert_eq!(latched.len(), 17);
    assert!(latched[1..9].iter().all(|entry| *entry == (0x0A, true)));
    assert!(latched[9..].iter().all(|entry| *entry == (0x15, true)));
}

#[test]
fn backlight_bit_rides_on_every_write() {
    let mut lcd = ready_driver();
    lcd.print_at("Hi", 1, 0).unwrap();
    assert!(
        lcd.bus_mut()
            .written
            .iter()
            .all(|w| w & BACKLIGHT == BACKLIGHT)
    );

    lcd.set_backlight(false).unwrap();
    lcd.bus_mut().written.clear();
    lcd.print_at("Hi", 1, 0).unwrap();
    assert!(lcd.bus_mut().written.iter().all(|w| w & BACKLIGHT == 0));
}

#[test]
fn backlight_change_refreshes_expander_once() {
    let mut lcd = ready_driver();
    lcd.set_backlight(false).unwrap();
    assert_eq!(lcd.bus_mut().written, vec![0x00]);

    lcd.bus_mut().written.clear();
    lcd.set_backlight(true).unwrap();
    assert_eq!(lcd.bus_mut().written, vec![BACKLIGHT]);
}

#[test]
fn scroll_never_touches_ddram() {
    let mut lcd = ready_driver();
    lcd.scroll_left().unwrap();
    lcd.scroll_left().unwrap();
    lcd.scroll_right().unwrap();
    lcd.scroll_right().unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(
        latched,
        vec![(0x18, false), (0x18, false), (0x1C, false), (0x1C, false)]
    );
}

#[test]
fn print_at_sets_address_then_streams_data() {
    let mut lcd = ready_driver();
    lcd.print_at("AB", 2, 5).unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(
        latched,
        vec![(0x80 | (0x40 + 5), false), (b'A', true), (b'B', true)]
    );
}

#[test]
fn clear_homes_the_cursor() {
    let mut lcd = ready_driver();
    lcd.clear().unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(latched, vec![(0x01, false), (0x02, false)]);
}

#[test]
fn non_ascii_prints_placeholder() {
    let mut lcd = ready_driver();
    lcd.print("é").unwrap();

    let latched = latched_bytes(&lcd.into_bus().written);
    assert_eq!(latched, vec![(b'?', true)]);
}

#[test]
fn failed_write_during_init_surfaces_init_error() {
    let mut lcd = I2cHD44780Driver::new(FakeBus {
        written: Vec::new(),
        fail_after: Some(0),
    });
    let err = lcd.init(true, false).unwrap_err();
    assert!(matches!(err, LcdError::Init(_)));
}

#[test]
fn write_failure_aborts_remaining_string() {
    let mut lcd = ready_driver();
    // Cursor command (4 writes) and 'A' (4 writes) go through; the first
    // write of 'B' fails.
    lcd.bus_mut().fail_after = Some(8);
    let err = lcd.print_at("ABC", 1, 0).unwrap_err();
    assert_eq!(err, LcdError::Transport(std::io::ErrorKind::TimedOut));

    let latched = latched_bytes(&lcd.bus_mut().written);
    assert_eq!(latched, vec![(0x80, false), (b'A', true)]);
}
