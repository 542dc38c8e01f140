/// Settings the command loop needs, regardless of where they came from.
pub trait ConfigProvider {
    /// Capacity of a lot created before the first command is read.
    fn initial_capacity(&self) -> Option<usize>;

    /// Print the full listing after each successful create/park/leave.
    fn show_lot_after_change(&self) -> bool;

    fn log_level(&self) -> Option<&str> {
        None
    }
}
