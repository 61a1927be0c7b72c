pub trait DepositSlot {
    fn is_envelope_received(&mut self) -> bool;
}

/// Stand-in for the envelope sensor; there is no hardware to ask
#[derive(Debug, Default)]
pub struct SimulatedDepositSlot;

impl DepositSlot for SimulatedDepositSlot {
    fn is_envelope_received(&mut self) -> bool {
        log::debug!("Simulated deposit slot reports envelope received");
        true
    }
}
