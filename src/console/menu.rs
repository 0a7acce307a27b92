// The closed set of operations offered by the main menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddWorker,
    UpdateWorker,
    DeleteWorker,
    ShowWorkerById,
    ShowWorkerByName,
    ShowWorkers,
    CreateShift,
    UpdateShift,
    DeleteShift,
    ShowShiftById,
    ShowShiftsByWorkerId,
    ShowShifts,
    Exit,
}

impl MenuOption {
    /// Menu order.
    pub const ALL: [MenuOption; 13] = [
        MenuOption::AddWorker,
        MenuOption::UpdateWorker,
        MenuOption::DeleteWorker,
        MenuOption::ShowWorkerById,
        MenuOption::ShowWorkerByName,
        MenuOption::ShowWorkers,
        MenuOption::CreateShift,
        MenuOption::UpdateShift,
        MenuOption::DeleteShift,
        MenuOption::ShowShiftById,
        MenuOption::ShowShiftsByWorkerId,
        MenuOption::ShowShifts,
        MenuOption::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::AddWorker => "Add a worker to the shifts logger",
            MenuOption::UpdateWorker => "Update a worker that has been added to the shifts logger",
            MenuOption::DeleteWorker => "Delete a worker from the shifts logger",
            MenuOption::ShowWorkerById => "Show detailed information on a worker by id",
            MenuOption::ShowWorkerByName => "Show detailed information on a worker by name",
            MenuOption::ShowWorkers => "Show all workers",
            MenuOption::CreateShift => "Log a new shift",
            MenuOption::UpdateShift => "Update an existing shift",
            MenuOption::DeleteShift => "Delete an existing shift",
            MenuOption::ShowShiftById => "Show a shift based on id",
            MenuOption::ShowShiftsByWorkerId => "Show all shifts for a worker based on worker id",
            MenuOption::ShowShifts => "Show all shifts",
            MenuOption::Exit => "Exit the program",
        }
    }

    pub fn choices() -> Vec<(MenuOption, &'static str)> {
        Self::ALL
            .iter()
            .map(|option| (*option, option.label()))
            .collect()
    }
}
