// Menu driven console loop.
//
// Each pass runs: menu -> input -> optional confirmation -> dispatch ->
// result -> pause. Invalid input or a declined confirmation skips dispatch,
// so the API is only contacted with a request that passed local validation.

use std::ops::ControlFlow;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::console::client::ApiClient;
use crate::console::menu::MenuOption;
use crate::console::pagination::{PAGE_SIZE, Pager};
use crate::console::render::{shift_summary, shifts_table, worker_summary, workers_table};
use crate::console::requests::{
    build_create_shift_request, build_create_worker_request, build_date_time, build_id,
    build_update_shift_request, build_update_worker_request,
};
use crate::console::terminal::{Prompt, PromptError, Terminal};
use crate::modules::shifts::core::dto::ShiftResponse;
use crate::modules::workers::core::dto::WorkerResponse;
use crate::shared::core::outcome::Outcome;
use crate::shared::core::validation::{DATE_FORMAT, is_valid_input_string};

/// What a successful operation leaves on screen.
#[derive(Debug, Clone, PartialEq)]
enum Report {
    Notice(String),
    Worker(WorkerResponse),
    Shift(ShiftResponse),
    Workers { entity: String, workers: Vec<WorkerResponse> },
    Shifts { entity: String, shifts: Vec<ShiftResponse> },
}

/// Why an operation stopped before producing a report.
enum Halt {
    Failed(String),
    Prompt(PromptError),
}

impl From<PromptError> for Halt {
    fn from(err: PromptError) -> Self {
        Halt::Prompt(err)
    }
}

fn proceed<T>(outcome: Outcome<T>) -> Result<T, Halt> {
    outcome.into_result().map_err(Halt::Failed)
}

type Step = Result<Report, Halt>;

pub struct ShiftLoggerUi<T: Terminal> {
    client: Arc<dyn ApiClient>,
    prompt: Prompt<T>,
}

impl<T: Terminal> ShiftLoggerUi<T> {
    pub fn new(client: Arc<dyn ApiClient>, prompt: Prompt<T>) -> Self {
        Self { client, prompt }
    }

    pub fn terminal(&self) -> &T {
        self.prompt.terminal()
    }

    /// Runs until Exit is chosen, input ends or the token is cancelled.
    pub async fn run(&mut self) -> Result<(), PromptError> {
        loop {
            match self.step().await {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => return Ok(()),
                Err(PromptError::Cancelled) => {
                    self.prompt.message("Operation cancelled by user").await?;
                    return Ok(());
                }
                Err(PromptError::Closed) => {
                    debug!("input closed, leaving the menu loop");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn step(&mut self) -> Result<ControlFlow<()>, PromptError> {
        let title = "Please choose one of the following options:";
        let option = self.prompt.select(title, &MenuOption::choices()).await?;
        if option == MenuOption::Exit {
            info!("exit chosen");
            return Ok(ControlFlow::Break(()));
        }

        debug!(?option, "menu selection");
        match self.perform(option).await {
            Ok(report) => self.show(report).await?,
            Err(Halt::Failed(message)) => self.prompt.message(&message).await?,
            Err(Halt::Prompt(err)) => return Err(err),
        }

        self.prompt.pause().await?;
        Ok(ControlFlow::Continue(()))
    }

    async fn perform(&mut self, option: MenuOption) -> Step {
        match option {
            MenuOption::AddWorker => self.add_worker().await,
            MenuOption::UpdateWorker => self.update_worker().await,
            MenuOption::DeleteWorker => self.delete_worker().await,
            MenuOption::ShowWorkerById => self.show_worker_by_id().await,
            MenuOption::ShowWorkerByName => self.show_worker_by_name().await,
            MenuOption::ShowWorkers => self.show_workers().await,
            MenuOption::CreateShift => self.create_shift().await,
            MenuOption::UpdateShift => self.update_shift().await,
            MenuOption::DeleteShift => self.delete_shift().await,
            MenuOption::ShowShiftById => self.show_shift_by_id().await,
            MenuOption::ShowShiftsByWorkerId => self.show_shifts_by_worker_id().await,
            MenuOption::ShowShifts => self.show_shifts().await,
            MenuOption::Exit => Ok(Report::Notice(String::new())),
        }
    }

    async fn show(&mut self, report: Report) -> Result<(), PromptError> {
        match report {
            Report::Notice(text) => self.prompt.message(&text).await,
            Report::Worker(worker) => self.prompt.message(&worker_summary(&worker)).await,
            Report::Shift(shift) => self.prompt.message(&shift_summary(&shift)).await,
            Report::Workers { entity, workers } => {
                self.paginate(&entity, &workers, workers_table).await
            }
            Report::Shifts { entity, shifts } => {
                self.paginate(&entity, &shifts, shifts_table).await
            }
        }
    }

    async fn paginate<I>(
        &mut self,
        entity: &str,
        items: &[I],
        render: fn(&[I]) -> String,
    ) -> Result<(), PromptError> {
        if items.is_empty() {
            return self.prompt.message(&format!("No {entity} found")).await;
        }

        let mut pager = Pager::new(items.len(), PAGE_SIZE);
        loop {
            self.prompt.message(&pager.header()).await?;
            self.prompt.message(&render(pager.page(items))).await?;

            let choices: Vec<_> = pager
                .choices()
                .into_iter()
                .map(|n| (n, n.label()))
                .collect();
            let navigation = self.prompt.select("Navigate pages:", &choices).await?;
            match pager.navigate(navigation) {
                Ok(ControlFlow::Break(())) => return Ok(()),
                Ok(ControlFlow::Continue(())) => {}
                Err(rejected) => self.prompt.message(&rejected.to_string()).await?,
            }
        }
    }

    /// Status line shown while the request is in flight.
    async fn dispatch<R>(
        &mut self,
        status: &str,
        call: impl Future<Output = Outcome<R>>,
    ) -> Result<R, Halt> {
        self.prompt.message(status).await?;
        proceed(call.await)
    }

    async fn ask_id(&mut self, question: &str, entity: &str) -> Result<i64, Halt> {
        let value = self.prompt.ask_number(question).await?;
        proceed(build_id(value, entity))
    }

    /// Asks `question` only after a yes to `offer`.
    async fn ask_optional(&mut self, offer: &str, question: &str) -> Result<Option<String>, Halt> {
        if self.prompt.confirm(offer).await? {
            Ok(Some(self.prompt.ask_text(question).await?))
        } else {
            Ok(None)
        }
    }

    async fn ask_interval(
        &mut self,
        qualifier: &str,
    ) -> Result<(NaiveDateTime, NaiveDateTime), Halt> {
        let question = format!("Enter the {qualifier}start time in format {DATE_FORMAT}: ");
        let start = self.prompt.ask_text(&question).await?;
        let question = format!("Enter the {qualifier}end time in format {DATE_FORMAT}: ");
        let end = self.prompt.ask_text(&question).await?;
        let start = proceed(build_date_time(&start, DATE_FORMAT))?;
        let end = proceed(build_date_time(&end, DATE_FORMAT))?;
        Ok((start, end))
    }

    async fn add_worker(&mut self) -> Step {
        let name = self.prompt.ask_text("Please enter worker name: ").await?;
        let department = self
            .prompt
            .ask_text("Please enter worker's department: ")
            .await?;
        let email = self
            .ask_optional(
                &format!("Do you wish to enter an email for {name}?"),
                "Please enter worker's email address: ",
            )
            .await?;
        let phone = self
            .ask_optional(
                &format!("Do you wish to enter a telephone number for {name}?"),
                "Please enter the worker's telephone number: ",
            )
            .await?;
        let request = build_create_worker_request(&name, &department, email, phone);
        let request = proceed(request)?;

        let question = format!("Add worker {}?", request.name);
        if !self.prompt.confirm(&question).await? {
            return Ok(Report::Notice("Creation cancelled".into()));
        }

        let client = self.client.clone();
        let status = format!("Creating worker {}...", request.name);
        let call = client.create_worker(&request);
        let created = self.dispatch(&status, call).await?;
        Ok(Report::Notice(format!("Successfully added worker with id = {}.", created.id)))
    }

    async fn update_worker(&mut self) -> Step {
        let id = self
            .ask_id("Enter the id for the worker to update: ", "Worker")
            .await?;
        let name = self
            .ask_optional(
                "Do you wish to update the worker's name?",
                "Enter updated name: ",
            )
            .await?;
        let department = self
            .ask_optional(
                "Do you wish to update the worker's department?",
                "Enter updated department: ",
            )
            .await?;
        let email = self
            .ask_optional(
                "Do you wish to update the worker's email address?",
                "Enter updated email address: ",
            )
            .await?;
        let phone = self
            .ask_optional(
                "Do you wish to update the worker's telephone number?",
                "Enter updated telephone number: ",
            )
            .await?;
        let request = proceed(build_update_worker_request(name, department, email, phone))?;

        let client = self.client.clone();
        let status = format!("Updating worker {id}...");
        let call = client.update_worker(id, &request);
        self.dispatch(&status, call).await?;
        Ok(Report::Notice(format!("Successfully updated worker {id}")))
    }

    async fn delete_worker(&mut self) -> Step {
        let id = self
            .ask_id("Enter the id of the worker to delete: ", "Worker")
            .await?;
        let question =
            format!("Are you sure that you wish to delete worker {id} and all of their shifts?");
        if !self.prompt.confirm(&question).await? {
            return Ok(Report::Notice("Deletion cancelled".into()));
        }

        let client = self.client.clone();
        let status = format!("Deleting worker {id}...");
        self.dispatch(&status, client.delete_worker(id)).await?;
        let notice = format!("Successfully deleted worker with id = {id}.");
        Ok(Report::Notice(notice))
    }

    async fn show_worker_by_id(&mut self) -> Step {
        let question = "Enter the id of the worker to see detailed information for: ";
        let id = self.ask_id(question, "Worker").await?;
        let client = self.client.clone();
        let worker = self
            .dispatch(
                &format!("Retrieving information for worker {id}..."),
                client.get_worker_by_id(id),
            )
            .await?;
        Ok(Report::Worker(worker))
    }

    async fn show_worker_by_name(&mut self) -> Step {
        let question = "Enter the name of the worker to see detailed information for: ";
        let name = self.prompt.ask_text(question).await?;
        if !is_valid_input_string(Some(name.as_str())) {
            return Err(Halt::Failed("Invalid worker name".into()));
        }

        let client = self.client.clone();
        let status = format!("Retrieving worker {name}...");
        let workers = self
            .dispatch(&status, client.get_workers(Some(&name)))
            .await?;
        Ok(Report::Workers {
            entity: format!("workers matching the name {name}"),
            workers,
        })
    }

    async fn show_workers(&mut self) -> Step {
        let client = self.client.clone();
        let workers = self
            .dispatch("Retrieving workers...", client.get_workers(None))
            .await?;
        Ok(Report::Workers {
            entity: "workers".into(),
            workers,
        })
    }

    async fn create_shift(&mut self) -> Step {
        let worker_id = self
            .ask_id("Enter the id of the worker to log a shift for: ", "Worker")
            .await?;
        let (start, end) = self.ask_interval("").await?;
        let request = proceed(build_create_shift_request(worker_id, start, end))?;

        let question = format!("Log this shift for worker {worker_id}?");
        if !self.prompt.confirm(&question).await? {
            return Ok(Report::Notice("Creation cancelled".into()));
        }

        let client = self.client.clone();
        let created = self
            .dispatch(
                &format!("Creating shift for worker {worker_id}..."),
                client.create_shift(&request),
            )
            .await?;
        Ok(Report::Notice(format!(
            "Shift {} for worker with id = {} added.",
            created.id, created.worker_id
        )))
    }

    async fn update_shift(&mut self) -> Step {
        let shift_id = self
            .ask_id("Enter the id of the shift to update: ", "Shift")
            .await?;
        let question = "Enter the id of the worker the shift belongs to: ";
        let worker_id = self.ask_id(question, "Worker").await?;
        let (start, end) = self.ask_interval("updated ").await?;
        let request = proceed(build_update_shift_request(worker_id, start, end))?;

        let client = self.client.clone();
        let updated = self
            .dispatch(
                &format!("Updating shift {shift_id}..."),
                client.update_shift(shift_id, &request),
            )
            .await?;
        Ok(Report::Notice(format!(
            "Shift {} for worker with id = {} updated.",
            updated.id, updated.worker_id
        )))
    }

    async fn delete_shift(&mut self) -> Step {
        let id = self
            .ask_id("Enter the id of the shift to delete: ", "Shift")
            .await?;
        let question = format!("Are you sure you want to delete shift {id}?");
        if !self.prompt.confirm(&question).await? {
            return Ok(Report::Notice("Deletion cancelled".into()));
        }

        let client = self.client.clone();
        let status = format!("Deleting shift {id}...");
        self.dispatch(&status, client.delete_shift(id)).await?;
        let notice = format!("Successfully deleted shift with id = {id}.");
        Ok(Report::Notice(notice))
    }

    async fn show_shift_by_id(&mut self) -> Step {
        let question = "Enter the id of the shift to see detailed information for: ";
        let id = self.ask_id(question, "Shift").await?;
        let client = self.client.clone();
        let status = format!("Retrieving shift {id}...");
        let shift = self.dispatch(&status, client.get_shift_by_id(id)).await?;
        Ok(Report::Shift(shift))
    }

    async fn show_shifts_by_worker_id(&mut self) -> Step {
        let worker_id = self
            .ask_id("Enter the id of the worker to see shifts for: ", "Worker")
            .await?;
        let client = self.client.clone();
        let shifts = self
            .dispatch(
                &format!("Retrieving shifts for worker {worker_id}..."),
                client.get_shifts(Some(worker_id)),
            )
            .await?;
        Ok(Report::Shifts {
            entity: format!("shifts for worker {worker_id}"),
            shifts,
        })
    }

    async fn show_shifts(&mut self) -> Step {
        let client = self.client.clone();
        let shifts = self
            .dispatch("Retrieving shifts...", client.get_shifts(None))
            .await?;
        Ok(Report::Shifts {
            entity: "shifts".into(),
            shifts,
        })
    }
}
