//! Orientation model: MADCTL traffic and the axis swap seen by the
//! window validator.

mod common;

use common::{clear, lcd, transactions};
use st7789_lcd::{ColorOrder, Error, Orientation, Rotation};

#[test]
fn set_orientation_sends_one_madctl_with_packed_byte() {
    let (log, mut lcd) = lcd(240, 320);
    let o = Orientation::new(Rotation::Deg270).with_color_order(ColorOrder::Bgr);
    lcd.set_orientation(o).unwrap();
    assert_eq!(transactions(&log), vec![(0x36, vec![0xA8])]);
}

#[test]
fn quarter_turns_swap_reported_geometry() {
    let (_log, mut lcd) = lcd(240, 320);
    assert_eq!(lcd.screen_size(), (240, 320));

    lcd.set_orientation(Orientation::new(Rotation::Deg90)).unwrap();
    assert_eq!(lcd.screen_size(), (320, 240));

    lcd.set_orientation(Orientation::new(Rotation::Deg180)).unwrap();
    assert_eq!(lcd.screen_size(), (240, 320));

    lcd.set_orientation(Orientation::new(Rotation::Deg270)).unwrap();
    assert_eq!(lcd.screen_size(), (320, 240));

    // repeated 90-degree turns do not keep swapping
    lcd.set_orientation(Orientation::new(Rotation::Deg90)).unwrap();
    assert_eq!(lcd.screen_size(), (320, 240));
}

#[test]
fn windows_validate_against_the_swapped_bounds() {
    let (log, mut lcd) = lcd(240, 320);
    // portrait: x up to 239, y up to 319
    assert_eq!(lcd.set_window(0, 300, 0, 0), Err(Error::OutOfRange));
    lcd.set_window(0, 0, 0, 300).unwrap();

    lcd.set_orientation(Orientation::new(Rotation::Deg90)).unwrap();
    clear(&log);

    // landscape: the same window flips validity
    lcd.set_window(0, 300, 0, 0).unwrap();
    assert_eq!(lcd.set_window(0, 0, 0, 300), Err(Error::OutOfRange));
}

#[test]
fn mirrors_combine_with_rotation_on_the_wire() {
    let (log, mut lcd) = lcd(240, 320);
    let o = Orientation::new(Rotation::Deg0)
        .with_mirror_x()
        .with_mirror_y();
    lcd.set_orientation(o).unwrap();
    // packs to the same bits as a 180-degree turn, but no axis swap either way
    assert_eq!(transactions(&log), vec![(0x36, vec![0xC0])]);
    assert_eq!(lcd.screen_size(), (240, 320));
}
