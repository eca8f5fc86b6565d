#![no_std]
#![no_main]

use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::Blocking;
use esp_println::println;

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration, Timer};
use embedded_hal_bus::spi::RefCellDevice;
use embedded_sdmmc::SdCard;
use esp_hal_embassy::Executor;
use static_cell::StaticCell;

use s3_board_rs::board::{Key, KeyMode, Led, LedConfig, LedPattern, Rgb, RgbLed};
use s3_board_rs::bus::{BusError, SpiBusConfig, SpiInterface};
use s3_board_rs::config;
use s3_board_rs::factory::{Action, FactoryEvent, FactoryStateMachine};
use s3_board_rs::lcd::{Lcd, LcdConfig};
use s3_board_rs::picture::{bmp, file_type, PicError, PictureLib};
use s3_board_rs::storage::{FixedTime, MemStorage, SdStorage, Storage, StorageError};
use s3_board_rs::text::FontSize;
use s3_board_rs::Color;

// Add app descriptor for espflash compatibility
esp_bootloader_esp_idf::esp_app_desc!();

type SpiBus = Spi<'static, Blocking>;
type SpiDev = RefCellDevice<'static, SpiBus, Output<'static>, Delay>;
type Display = Lcd<SpiInterface<SpiDev, Output<'static>>, Output<'static>, Output<'static>>;
type SdDevice = SdCard<SpiDev, Delay>;
type Card = SdStorage<SdDevice, FixedTime>;
type BoardRgb = RgbLed<Output<'static>, Output<'static>, Output<'static>>;

/// SD cards must be initialised below 400 kHz
const SD_INIT_KHZ: u32 = 400;

/// Commands for the LED task
#[derive(Debug, Clone, Copy)]
enum LedCommand {
    Pattern(LedPattern),
    Rgb(Rgb),
}

static SPI_BUS: StaticCell<RefCell<SpiBus>> = StaticCell::new();
static LED_COMMANDS: Channel<CriticalSectionRawMutex, LedCommand, 4> = Channel::new();
static KEY_EVENTS: Channel<CriticalSectionRawMutex, (), 4> = Channel::new();

// Static executor for embassy tasks
static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    println!("[PANIC] {}", info);
    loop {}
}

/// LCD transport failures leave the panel in an unknown state.
fn fatal<T>(result: Result<T, BusError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("[LCD] {}", e),
    }
}

/// SD card before and after mounting
enum Slot {
    Unmounted(SdDevice),
    Mounted(Card),
}

fn set_spi_clock(bus: &RefCell<SpiBus>, rate: Rate) {
    let config = SpiConfig::default().with_frequency(rate).with_mode(Mode::_0);
    if let Err(e) = bus.borrow_mut().apply_config(&config) {
        println!("[SD] cannot change SPI clock: {:?}", e);
    }
}

fn probe_sd(slot: Slot, bus: &RefCell<SpiBus>, lcd_rate: Rate) -> (Slot, FactoryEvent) {
    let device = match slot {
        Slot::Unmounted(device) => device,
        Slot::Mounted(card) => card.unmount(),
    };
    device.mark_card_uninit();

    set_spi_clock(bus, Rate::from_khz(SD_INIT_KHZ));
    let result = SdStorage::mount(device, FixedTime);
    set_spi_clock(bus, lcd_rate);

    match result {
        Ok(card) => (Slot::Mounted(card), FactoryEvent::SdReady),
        Err(e) => {
            println!("[SD] mount failed: {}", e.error);
            (Slot::Unmounted(e.device), FactoryEvent::SdFailed)
        }
    }
}

fn draw_led_key_panel(lcd: &mut Display) {
    fatal(lcd.clear(Color::WHITE));
    fatal(lcd.show_string(4, 4, 152, 16, FontSize::F16, "LED / KEY TEST", Color::BLUE));
    fatal(lcd.draw_rectangle(8, 30, 74, 74, Color::BLACK));
    fatal(lcd.show_string(12, 34, 60, 12, FontSize::F12, "LED: blink", Color::BLACK));
    fatal(lcd.draw_rectangle(84, 30, 150, 74, Color::BLACK));
    fatal(lcd.show_string(88, 34, 60, 36, FontSize::F12, "Press BOOT 3 times", Color::BLACK));
}

fn show_banner(lcd: &mut Display, text: &str) {
    fatal(lcd.show_banner(text, FontSize::F16, Color::RED, Color::WHITE));
}

/// Built-in picture shown before the factory test starts
fn show_splash(lcd: &mut Display, pictures: &PictureLib) {
    let (w, h) = (lcd.width() as u32, lcd.height() as u32);
    let mut splash = MemStorage::new();
    match bmp::encode(w, h, |x, y| ((x * 255 / w) as u8, (y * 255 / h) as u8, 0x80)) {
        Ok(data) => splash.insert("SPLASH.BMP", data),
        Err(e) => println!("[PIC] splash image: {}", e),
    }
    match pictures.load_picture(lcd, &mut splash, "SPLASH.BMP", 0, 0, w as u16, h as u16) {
        Ok(()) => {}
        Err(PicError::Bus) => panic!("[LCD] bus failure during splash"),
        Err(e) => println!("[PIC] splash failed: {}", e),
    }
    fatal(lcd.show_string(4, 4, 152, 16, FontSize::F16, "ESP32-S3 BOARD", Color::WHITE));
    fatal(lcd.show_string(4, 60, 152, 12, FontSize::F12, s3_board_rs::VERSION, Color::WHITE));
}

#[embassy_executor::task]
async fn led_task(mut led: Led<Output<'static>>, mut rgb: BoardRgb, period_ms: u32) {
    let mut pattern = LedPattern::Solid;
    let mut tick = 0u32;
    loop {
        while let Ok(cmd) = LED_COMMANDS.try_receive() {
            match cmd {
                LedCommand::Pattern(p) => pattern = p,
                LedCommand::Rgb(c) => {
                    rgb.set(c).ok();
                }
            }
        }
        led.set(pattern.is_on(tick)).ok();
        tick = tick.wrapping_add(1);
        Timer::after_millis((period_ms / 4).max(1) as u64).await;
    }
}

#[embassy_executor::task]
async fn key_task(mut key: Key<Input<'static>>) {
    let mut delay = Delay::new();
    loop {
        if let Ok(true) = key.scan(KeyMode::Single, &mut delay) {
            // waits while the factory task is busy drawing
            KEY_EVENTS.send(()).await;
        }
        Timer::after_millis(10).await;
    }
}

// Factory flow driven by the state machine; the only task touching the SPI bus
#[embassy_executor::task]
async fn factory_task(
    mut lcd: Display,
    sd: SdDevice,
    bus: &'static RefCell<SpiBus>,
    lcd_rate: Rate,
) {
    let pictures = PictureLib::new(&lcd);
    show_splash(&mut lcd, &pictures);
    Timer::after_millis(1000).await;

    let interval = config::parse_u32(config::SLIDESHOW_INTERVAL_MS, 3000);
    let mut sm = FactoryStateMachine::new(interval);
    let mut slot = Some(Slot::Unmounted(sd));
    let mut playlist: Vec<String> = Vec::new();
    let mut next = 0usize;
    let mut last_pattern = None;
    let mut last_rgb = None;

    println!("[FACTORY] starting");
    sm.handle_event(FactoryEvent::Started);

    loop {
        let state = sm.get_current_state();
        for action in sm.update() {
            // Actions queued for a state that has already been left are stale
            if sm.get_current_state() != state {
                break;
            }
            match action {
                Action::SetLed(pattern) => {
                    if last_pattern != Some(pattern) {
                        last_pattern = Some(pattern);
                        LED_COMMANDS.send(LedCommand::Pattern(pattern)).await;
                    }
                }
                Action::SetRgb(color) => {
                    if last_rgb != Some(color) {
                        last_rgb = Some(color);
                        LED_COMMANDS.send(LedCommand::Rgb(color)).await;
                    }
                }
                Action::ClearScreen(color) => fatal(lcd.clear(color)),
                Action::DrawLedKeyPanel => {
                    draw_led_key_panel(&mut lcd);
                    sm.mark_panel_drawn();
                }
                Action::ProbeSd => {
                    let Some(current) = slot.take() else {
                        continue;
                    };
                    let (current, event) = probe_sd(current, bus, lcd_rate);
                    slot = Some(current);
                    sm.handle_event(event);
                }
                Action::OpenPictureDir => {
                    let mut names = Vec::new();
                    let event = match slot.as_mut() {
                        Some(Slot::Mounted(card)) => {
                            let listed = card.list(config::PICTURE_DIR, &mut |name: &str| {
                                if file_type(name).is_picture() {
                                    names.push(String::from(name));
                                }
                            });
                            match listed {
                                Ok(()) if !names.is_empty() => FactoryEvent::DirOpened,
                                Ok(()) | Err(StorageError::NotFound) => FactoryEvent::DirMissing,
                                Err(_) => FactoryEvent::SdFailed,
                            }
                        }
                        _ => FactoryEvent::SdFailed,
                    };
                    names.sort();
                    println!("[FACTORY] {} pictures in {}", names.len(), config::PICTURE_DIR);
                    playlist = names;
                    next = 0;
                    sm.handle_event(event);
                }
                Action::ShowNextPicture => {
                    let (w, h) = (lcd.width(), lcd.height());
                    let event = match slot.as_mut() {
                        Some(Slot::Mounted(card)) if !playlist.is_empty() => {
                            let name = &playlist[next % playlist.len()];
                            next = next.wrapping_add(1);
                            let mut path = String::from(config::PICTURE_DIR);
                            path.push('/');
                            path.push_str(name);
                            match pictures.load_picture(&mut lcd, card, &path, 0, 0, w, h) {
                                Ok(()) => FactoryEvent::PictureShown,
                                Err(PicError::Bus) => panic!("[LCD] bus failure showing {}", path),
                                Err(e) => {
                                    println!("[PIC] {}: {} (code 0x{:02X})", path, e, e.code());
                                    FactoryEvent::PictureFailed
                                }
                            }
                        }
                        _ => FactoryEvent::PictureFailed,
                    };
                    sm.handle_event(event);
                }
                Action::ShowErrorBanner(text) => show_banner(&mut lcd, text),
                Action::ScheduleRetry(ms) => {
                    Timer::after_millis(ms as u64).await;
                    if sm.is_error_state() {
                        sm.handle_event(FactoryEvent::Tick);
                    }
                }
                Action::Wait(ms) => {
                    let event =
                        match with_timeout(Duration::from_millis(ms as u64), KEY_EVENTS.receive())
                            .await
                        {
                            Ok(()) => FactoryEvent::KeyPressed,
                            Err(_) => FactoryEvent::Tick,
                        };
                    sm.handle_event(event);
                }
                Action::LogError(state) => {
                    println!(
                        "[FACTORY] error state {:?}, context {:?}",
                        state,
                        sm.get_error_context()
                    );
                }
            }
        }

        // Small delay to prevent busy loop
        Timer::after_millis(10).await;
    }
}

#[esp_hal::main]
fn main() -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_println::logger::init_logger_from_env();

    // Internal RAM for small buffers, PSRAM for picture canvases
    esp_alloc::heap_allocator!(size: 96 * 1024);
    esp_alloc::psram_allocator!(peripherals.PSRAM, esp_hal::psram);

    // Initialize embassy time system
    let timer_group0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timer_group0.timer0);

    println!("[MAIN] s3-board-rs {}", s3_board_rs::VERSION);

    // Shared SPI2 bus, started slow for the SD card
    let bus_config = match SpiBusConfig::default()
        .with_frequency_mhz(config::parse_u32(config::LCD_SPI_MHZ, 60))
    {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("[MAIN] LCD_SPI_MHZ rejected ({}), using default", e);
            SpiBusConfig::default()
        }
    };
    let lcd_rate = Rate::from_hz(bus_config.frequency_hz());
    let spi = match Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_khz(SD_INIT_KHZ))
            .with_mode(Mode::_0),
    ) {
        Ok(spi) => spi
            .with_sck(peripherals.GPIO12)
            .with_mosi(peripherals.GPIO11)
            .with_miso(peripherals.GPIO13),
        Err(e) => panic!("[MAIN] SPI2 configuration failed: {:?}", e),
    };
    let spi_bus = SPI_BUS.init(RefCell::new(spi));
    println!(
        "[MAIN] SPI2 MOSI={} CLK={} MISO={}, LCD at {} Hz",
        config::SPI_MOSI_PIN,
        config::SPI_CLK_PIN,
        config::SPI_MISO_PIN,
        bus_config.frequency_hz()
    );

    // LCD
    let lcd_cs = Output::new(peripherals.GPIO39, Level::High, OutputConfig::default());
    let lcd_dc = Output::new(peripherals.GPIO40, Level::High, OutputConfig::default());
    let lcd_rst = Output::new(peripherals.GPIO38, Level::High, OutputConfig::default());
    let lcd_bl = Output::new(peripherals.GPIO41, Level::Low, OutputConfig::default());
    let Ok(lcd_spi) = RefCellDevice::new(spi_bus, lcd_cs, Delay::new());
    let mut lcd = Lcd::new(
        SpiInterface::new(lcd_spi, lcd_dc),
        lcd_rst,
        lcd_bl,
        LcdConfig::default(),
    );
    set_spi_clock(spi_bus, lcd_rate);
    fatal(lcd.init(&mut Delay::new()));

    // SD card shares the bus behind its own chip select
    let sd_cs = Output::new(peripherals.GPIO2, Level::High, OutputConfig::default());
    let Ok(sd_spi) = RefCellDevice::new(spi_bus, sd_cs, Delay::new());
    let sd = SdCard::new(sd_spi, Delay::new());

    // LEDs and BOOT key
    let led_config = LedConfig::default();
    let led = fatal(Led::new(
        Output::new(peripherals.GPIO1, Level::High, OutputConfig::default()),
        &led_config,
    ));
    let rgb = fatal(RgbLed::new(
        Output::new(peripherals.GPIO4, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO6, Level::High, OutputConfig::default()),
        &led_config,
    ));
    let key = Key::new(Input::new(
        peripherals.GPIO0,
        InputConfig::default().with_pull(Pull::Up),
    ));
    println!(
        "[MAIN] LED={} RGB={}/{}/{} KEY={}",
        config::LED_PIN,
        config::RGB_R_PIN,
        config::RGB_G_PIN,
        config::RGB_B_PIN,
        config::BOOT_KEY_PIN
    );

    // Initialize embassy executor and run tasks
    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        println!("[MAIN] Spawning LED task...");
        spawner
            .spawn(led_task(led, rgb, led_config.blink_period_ms()))
            .ok();

        println!("[MAIN] Spawning key task...");
        spawner.spawn(key_task(key)).ok();

        println!("[MAIN] Spawning factory task...");
        match spawner.spawn(factory_task(lcd, sd, spi_bus, lcd_rate)) {
            Ok(_) => println!("[MAIN] factory task spawned"),
            Err(e) => println!("[MAIN] Failed to spawn factory task: {:?}", e),
        }
    });
}
