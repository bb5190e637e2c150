#![no_std]
#![no_main]

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use exec_timer::{ExecutionTimer, HwCounter, MeasurementHistory, TextSink};
use panic_halt as _;

// SysTick reload value; counts down from here
const RELOAD: u32 = 65_535;

// SysTick as a 16-bit up-counter. The external reference clock must be
// 1 MHz on the target for results to be in microseconds.
pub struct SysTickCounter {
    syst: SYST,
}

impl SysTickCounter {
    pub fn new(mut syst: SYST) -> Self {
        syst.disable_counter();
        syst.set_clock_source(SystClkSource::External);
        syst.set_reload(RELOAD);
        syst.clear_current();
        Self { syst }
    }
}

impl HwCounter for SysTickCounter {
    fn set_count(&mut self, _value: u16) {
        // Any write clears CVR; the next tick reloads
        self.syst.clear_current();
    }

    // From a cleared CVR the first tick loads RELOAD, each later tick
    // decrements, so after k ticks CVR = RELOAD + 1 - k. CVR back at 0 means
    // either no tick yet or exactly 65536 ticks; both read as 0, which is
    // the 16-bit wrap, and the second case sets COUNTFLAG.
    fn read_count(&mut self) -> u16 {
        match SYST::get_current() {
            0 => 0,
            current => (RELOAD + 1 - current) as u16,
        }
    }

    fn enable(&mut self) {
        self.syst.enable_counter();
    }

    fn disable(&mut self) {
        self.syst.disable_counter();
    }

    // COUNTFLAG is set on the 1 -> 0 transition, i.e. at tick 65536
    fn overflowed(&mut self) -> bool {
        self.syst.has_wrapped()
    }

    fn clear_overflow(&mut self) {
        // COUNTFLAG clears on read
        let _ = self.syst.has_wrapped();
    }
}

// Minimal TextSink implementation - measures only struct size
pub struct MinimalSink;

impl TextSink for MinimalSink {
    type Error = ();

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        core::hint::black_box(c);
        Ok(())
    }
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let Some(core) = cortex_m::Peripherals::take() else {
        loop {
            cortex_m::asm::nop();
        }
    };

    let mut timer: ExecutionTimer<SysTickCounter> =
        ExecutionTimer::init(SysTickCounter::new(core.SYST));
    let mut history = MeasurementHistory::<8>::new();
    let mut sink = MinimalSink;

    loop {
        timer.start();
        for _ in 0..100 {
            cortex_m::asm::nop();
        }
        history.record(timer.stop());

        // Checked path so error reporting is included in the binary
        let _ = core::hint::black_box(timer.stop_checked());
        let _ = timer.print(&mut sink);

        core::hint::black_box(&history);
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
