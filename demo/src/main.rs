mod icons;

use dotenv::dotenv;
use log::{debug, info};
use pilcd_i2c::hd44780::driver::{HD44780Driver, I2cHD44780Driver};
use pilcd_i2c::hd44780::{COLUMNS, TextDisplay};
use pilcd_i2c::rppal::RppalTransport;
use std::env::var;
use std::thread::sleep;
use std::time::Duration;

fn main() -> eyre::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    let bus: u8 = match var("PILCD_I2C_BUS") {
        Ok(value) => value.parse()?,
        Err(_) => 1,
    };
    let address: u16 = match var("PILCD_I2C_ADDR") {
        Ok(value) => u16::from_str_radix(value.trim_start_matches("0x"), 16)?,
        Err(_) => 0x27,
    };

    info!("LCD2004 @ bus {}, address {:#04x}", bus, address);

    debug!("Opening I2C transport...");
    let transport = RppalTransport::open(bus, address)?;
    debug!("{:?} opened.", transport);

    let mut lcd = I2cHD44780Driver::new(transport);
    lcd.init(true, false)?;
    debug!("{:?} initialized.", lcd);

    lcd.print_at("LCD2004 driver demo", 1, 0)?;

    const VERSION_LINE: &str = concat!("v.", env!("CARGO_PKG_VERSION"));
    lcd.print_at(VERSION_LINE, 4, COLUMNS - VERSION_LINE.len() as u8)?;

    info!("Loading icon set...");
    lcd.load_glyphs(&[
        icons::BELL,
        icons::NOTE,
        icons::CLOCK,
        icons::HEART,
        icons::DUCK,
        icons::CHECK,
        icons::CROSS,
        icons::RETURN_ARROW,
    ])?;
    lcd.set_cursor(2, 0)?;
    for slot in 0..8u8 {
        lcd.send_data(slot)?;
    }

    sleep(Duration::from_secs(2));

    info!("Scrolling...");
    for _ in 0..4 {
        lcd.scroll_left()?;
        sleep(Duration::from_millis(250));
    }
    for _ in 0..4 {
        lcd.scroll_right()?;
        sleep(Duration::from_millis(250));
    }

    info!("Blinking backlight...");
    for _ in 0..3 {
        lcd.set_backlight(false)?;
        sleep(Duration::from_millis(300));
        lcd.set_backlight(true)?;
        sleep(Duration::from_millis(300));
    }

    // Reloading CGRAM instantly restyles the glyph cells already on screen.
    info!("Loading smiley mosaic...");
    lcd.load_glyphs(&icons::SMILEY_FACE)?;
    lcd.set_cursor(3, 6)?;
    for slot in 0..7u8 {
        lcd.send_data(slot)?;
    }

    // Slot 7 is free; give the face some company.
    lcd.load_glyph(7, &icons::HEART)?;
    lcd.set_cursor(3, 14)?;
    lcd.send_data(7)?;

    sleep(Duration::from_secs(2));
    lcd.clear()?;
    lcd.print_at("Done.", 1, 0)?;

    info!("Demo finished.");
    Ok(())
}
