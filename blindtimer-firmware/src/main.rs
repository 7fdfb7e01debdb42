//! Blindtimer - Poker Blind Timer Firmware
//!
//! Main firmware binary for the RP2040-based blind timer. The main loop
//! owns the application and polls it every few milliseconds; tasks own
//! the encoder, buzzer and panel UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Duration, Instant, Ticker, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use blindtimer_core::app::{AppContext, Board};
use blindtimer_core::traits::PowerLatch;

use crate::audio::ChannelAudio;
use crate::channels::ENCODER_STEPS;
use crate::display::PanelDisplay;
use crate::pins::{KeyPin, LatchPin};
use crate::storage::FlashKvStore;

mod audio;
mod channels;
mod config;
mod display;
mod pins;
mod storage;
mod tasks;

/// Main loop period
const MAIN_LOOP_MS: u64 = 5;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Blindtimer firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Hold the regulator on before anything else; the power button
    // only bridges it while pressed
    let power = PowerLatch::new(LatchPin::new(Output::new(p.PIN_7, Level::High)));
    info!("Power latch held");

    // Panel link: TX only, the panel never answers
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 16]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();
    info!("UART initialized for panel link");

    // Pin assignments are board-specific: dial on GPIO2/3, button GPIO4,
    // info key GPIO5, piezo GPIO6 (PWM3 A)
    let encoder = tasks::Encoder::new(Input::new(p.PIN_2, Pull::Up), Input::new(p.PIN_3, Pull::Up));
    let button = KeyPin::new(Input::new(p.PIN_4, Pull::Up));
    let info_key = KeyPin::new(Input::new(p.PIN_5, Pull::Up));
    let buzzer = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, PwmConfig::default());

    let store = FlashKvStore::new(p.FLASH, p.DMA_CH0);

    spawner.spawn(tasks::display_tx_task(tx)).unwrap();
    spawner.spawn(tasks::encoder_task(encoder)).unwrap();
    spawner.spawn(tasks::buzzer_task(buzzer)).unwrap();
    info!("All tasks spawned");

    let board = Board {
        display: PanelDisplay::new(),
        audio: ChannelAudio,
        store,
        power,
        button,
        info_key,
    };
    let timer_config = config::timer_config();
    info!("Timer config: {:?}", timer_config);
    let mut app = AppContext::new(board, timer_config);
    app.start(now_ms());

    let mut ticker = Ticker::every(Duration::from_millis(MAIN_LOOP_MS));
    loop {
        ticker.next().await;

        let mut delta: i32 = 0;
        while let Ok(step) = ENCODER_STEPS.try_receive() {
            delta += step as i32;
        }

        if !app.poll(now_ms(), delta) {
            break;
        }
    }

    // Latch released; wait for the regulator to drop
    info!("Powered off");
    loop {
        Timer::after_secs(60).await;
        trace!("Still powered, power button held?");
    }
}

/// Milliseconds since boot; wraps after ~49 days
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
