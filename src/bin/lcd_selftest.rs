//! LCD bring-up test
//!
//! Cycles through colour fills, primitives, every font size, number output
//! and all scan directions. Runs forever; watch the panel and the serial log.

#![no_std]
#![no_main]

use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_println::println;

use s3_board_rs::bus::{BusError, SpiBusConfig, SpiInterface};
use s3_board_rs::config;
use s3_board_rs::lcd::{Lcd, LcdConfig, Orientation, ScanDir};
use s3_board_rs::text::{FontSize, Padding, TextMode};
use s3_board_rs::Color;

esp_bootloader_esp_idf::esp_app_desc!();

const FILLS: [Color; 8] = [
    Color::WHITE,
    Color::BLACK,
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::GRAY,
    Color::BROWN,
];

const SCANS: [ScanDir; 8] = [
    ScanDir::L2rU2d,
    ScanDir::L2rD2u,
    ScanDir::R2lU2d,
    ScanDir::R2lD2u,
    ScanDir::U2dL2r,
    ScanDir::U2dR2l,
    ScanDir::D2uL2r,
    ScanDir::D2uR2l,
];

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    println!("[PANIC] {}", info);
    loop {}
}

fn primitives<B, RST, BL>(lcd: &mut Lcd<B, RST, BL>) -> Result<(), BusError>
where
    B: s3_board_rs::bus::LcdBus,
    RST: embedded_hal::digital::OutputPin,
    BL: embedded_hal::digital::OutputPin,
{
    let (w, h) = (lcd.width(), lcd.height());
    lcd.clear(Color::WHITE)?;
    lcd.draw_rectangle(0, 0, w - 1, h - 1, Color::BLACK)?;
    lcd.draw_line(0, 0, w - 1, h - 1, Color::RED)?;
    lcd.draw_line(0, h - 1, w - 1, 0, Color::BLUE)?;
    lcd.draw_circle(w / 2, h / 2, h / 3, Color::GREEN)?;
    lcd.fill_rect(4, 4, 20, 20, Color::MAGENTA)?;
    Ok(())
}

fn fonts<B, RST, BL>(lcd: &mut Lcd<B, RST, BL>) -> Result<(), BusError>
where
    B: s3_board_rs::bus::LcdBus,
    RST: embedded_hal::digital::OutputPin,
    BL: embedded_hal::digital::OutputPin,
{
    let w = lcd.width();
    lcd.clear(Color::WHITE)?;
    let mut y = 0;
    for size in [FontSize::F12, FontSize::F16, FontSize::F24, FontSize::F32] {
        if y + size.height() > lcd.height() {
            break;
        }
        lcd.show_string(0, y, w, size.height(), size, "Ab12", Color::BLACK)?;
        y += size.height();
    }
    Ok(())
}

fn numbers<B, RST, BL>(lcd: &mut Lcd<B, RST, BL>, n: u32) -> Result<(), BusError>
where
    B: s3_board_rs::bus::LcdBus,
    RST: embedded_hal::digital::OutputPin,
    BL: embedded_hal::digital::OutputPin,
{
    lcd.clear(Color::WHITE)?;
    lcd.show_num(0, 0, n, 6, FontSize::F16, Color::BLUE)?;
    lcd.show_xnum(0, 20, n, 6, FontSize::F16, Padding::Zeros, TextMode::Opaque, Color::RED)?;
    lcd.show_xnum(0, 40, n % 1000, 6, FontSize::F16, Padding::Spaces, TextMode::Overlay, Color::BLACK)?;
    Ok(())
}

fn orientations<B, RST, BL>(lcd: &mut Lcd<B, RST, BL>, delay: &Delay) -> Result<(), BusError>
where
    B: s3_board_rs::bus::LcdBus,
    RST: embedded_hal::digital::OutputPin,
    BL: embedded_hal::digital::OutputPin,
{
    for dir in SCANS {
        lcd.scan_direction(dir)?;
        lcd.clear(Color::WHITE)?;
        lcd.show_string(0, 0, lcd.width(), 16, FontSize::F16, "SCAN", Color::BLACK)?;
        println!("[LCD] scan {:?}", dir);
        delay.delay_millis(400);
    }
    for dir in [Orientation::Portrait, Orientation::Landscape] {
        lcd.display_dir(dir)?;
        primitives(lcd)?;
        println!("[LCD] {:?} {}x{}", dir, lcd.width(), lcd.height());
        delay.delay_millis(800);
    }
    Ok(())
}

fn check(stage: &str, result: Result<(), BusError>) -> Result<(), BusError> {
    match &result {
        Ok(()) => println!("[LCD] PASS {}", stage),
        Err(e) => println!("[LCD] FAIL {}: {}", stage, e),
    }
    result
}

fn run<B, RST, BL>(lcd: &mut Lcd<B, RST, BL>, delay: &Delay, round: u32) -> Result<(), BusError>
where
    B: s3_board_rs::bus::LcdBus,
    RST: embedded_hal::digital::OutputPin,
    BL: embedded_hal::digital::OutputPin,
{
    for color in FILLS {
        check("clear", lcd.clear(color))?;
        delay.delay_millis(300);
    }
    check("primitives", primitives(lcd))?;
    delay.delay_millis(1000);
    check("fonts", fonts(lcd))?;
    delay.delay_millis(1000);
    check("numbers", numbers(lcd, round.wrapping_mul(1234)))?;
    delay.delay_millis(1000);
    check("orientation", orientations(lcd, delay))
}

#[esp_hal::main]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));
    esp_println::logger::init_logger_from_env();

    let bus_config = SpiBusConfig::default()
        .with_frequency_mhz(config::parse_u32(config::LCD_SPI_MHZ, 60))
        .unwrap_or_default();
    let spi = match Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_hz(bus_config.frequency_hz()))
            .with_mode(Mode::_0),
    ) {
        Ok(spi) => spi
            .with_sck(peripherals.GPIO12)
            .with_mosi(peripherals.GPIO11)
            .with_miso(peripherals.GPIO13),
        Err(e) => panic!("[LCD] SPI2 configuration failed: {:?}", e),
    };

    let cs = Output::new(peripherals.GPIO39, Level::High, OutputConfig::default());
    let dc = Output::new(peripherals.GPIO40, Level::High, OutputConfig::default());
    let rst = Output::new(peripherals.GPIO38, Level::High, OutputConfig::default());
    let bl = Output::new(peripherals.GPIO41, Level::Low, OutputConfig::default());
    let spi = match embedded_hal_bus::spi::ExclusiveDevice::new(spi, cs, Delay::new()) {
        Ok(dev) => dev,
        Err(e) => match e {},
    };

    let delay = Delay::new();
    let mut lcd = Lcd::new(SpiInterface::new(spi, dc), rst, bl, LcdConfig::default());
    if let Err(e) = lcd.init(&mut Delay::new()) {
        panic!("[LCD] init failed: {}", e);
    }
    println!("[LCD] self test at {} Hz", bus_config.frequency_hz());

    let mut round = 0u32;
    loop {
        round = round.wrapping_add(1);
        println!("[LCD] round {}", round);
        if let Err(e) = run(&mut lcd, &delay, round) {
            panic!("[LCD] {}", e);
        }
    }
}
