//! The interactive controller
//!
//! One steady state (the main menu) and one short sub-flow per menu entry.
//! The loop is iterative: every sub-flow returns here, and only Exit or an
//! interrupt leaves it.
//!
//! A failed sub-flow is reported and forgotten. Database errors never end
//! the session; the user simply picks the action again.

pub mod actions;
pub mod input;
pub mod menu;
pub mod queries;

use crate::db::Database;
use crate::error::{PromptError, Result, TrackerError};
use crate::prompt::{Prompter, select_choice};
use crate::render::TableStyle;
use tracing::Instrument;

pub use menu::{MENU_PROMPT, MenuAction};

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Menu-driven controller over a database handle and a prompter
pub struct Tracker<D, P> {
    db: D,
    prompter: P,
    style: TableStyle,
}

impl<D: Database, P: Prompter> Tracker<D, P> {
    pub fn new(db: D, prompter: P) -> Self {
        Self {
            db,
            prompter,
            style: TableStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Show the menu until the user exits.
    ///
    /// # Errors
    /// Only when the terminal itself stops working; action failures are
    /// reported to the user and the menu comes back.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let action =
                match select_choice(&mut self.prompter, MENU_PROMPT, &MenuAction::choices()) {
                    Ok(action) => action,
                    Err(PromptError::Cancelled) => continue,
                    Err(PromptError::Interrupted) => MenuAction::Exit,
                    Err(e) => return Err(e.into()),
                };

            if self.perform(action).await? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Run a single menu action, absorbing its failures.
    ///
    /// # Errors
    /// Returns the error only if the terminal is unusable.
    pub async fn perform(&mut self, action: MenuAction) -> Result<Flow> {
        if action == MenuAction::Exit {
            self.prompter.say("Goodbye!");
            return Ok(Flow::Quit);
        }

        let span = tracing::info_span!("action", name = action.log_name());
        let outcome = self.dispatch(action).instrument(span).await;

        match outcome {
            Ok(()) => Ok(Flow::Continue),
            Err(TrackerError::Prompt(PromptError::Cancelled)) => {
                tracing::debug!(action = action.log_name(), "cancelled by user");
                Ok(Flow::Continue)
            }
            Err(TrackerError::Prompt(PromptError::Interrupted)) => {
                self.prompter.say("Goodbye!");
                Ok(Flow::Quit)
            }
            Err(TrackerError::Prompt(PromptError::Terminal(msg))) => {
                Err(PromptError::Terminal(msg).into())
            }
            Err(e) => {
                tracing::debug!(action = action.log_name(), error = %e, "action failed");
                self.prompter
                    .warn(&format!("{}: {}", action.failure_context(), e));
                Ok(Flow::Continue)
            }
        }
    }

    async fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::ViewDepartments => self.view_departments().await,
            MenuAction::ViewRoles => self.view_roles().await,
            MenuAction::ViewEmployees => self.view_employees().await,
            MenuAction::AddDepartment => self.add_department().await,
            MenuAction::AddRole => self.add_role().await,
            MenuAction::AddEmployee => self.add_employee().await,
            MenuAction::UpdateEmployeeRole => self.update_employee_role().await,
            MenuAction::Exit => Ok(()),
        }
    }
}
