#![no_main]
#![no_std]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use panic_halt as _;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use positioner::config::{PositionerConfig, BAUD_RATE};
use positioner::control::MotionState;
use positioner::drivers::StepDir;
use positioner::hw::{BoardPins, StatusLeds, SysDelay, Usart};
use positioner::protocol::{Console, Reply};
use positioner::Positioner;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOB, dp.GPIOD, dp.GPIOF);
    let mut leds = StatusLeds::new(pins.leds.green, pins.leds.blue, pins.leds.red);

    // USART3 (ST-LINK VCP)
    let usart_cfg = Config {
        baud_rate: BAUD_RATE.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut console = Console::new(Usart::new(serial));

    // SysTick delay for the STEP pulse timing
    let delay = SysDelay::new(Delay::new(cp.SYST, clocks.sysclk().raw()));

    // Stepper
    let config = PositionerConfig::default();
    let driver = StepDir::new(
        pins.stepper.step,
        pins.stepper.dir,
        pins.stepper.enable,
        pins.stepper.ms1,
        delay,
        &config,
    );
    let mut positioner = Positioner::new(driver, &config);
    positioner.configure();

    console.greet();
    leds.show(MotionState::Idle);

    loop {
        let reply = console.poll(|command| {
            leds.show(MotionState::Moving);
            let reply = positioner.respond(command);
            leds.show(MotionState::Idle);
            reply
        });

        if let Some(reply) = reply {
            leds.fault(matches!(reply, Reply::Rejected(_)));
        }
    }
}
