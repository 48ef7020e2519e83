//! Main menu entries

use crate::prompt::Choice;

/// Prompt shown above the main menu
pub const MENU_PROMPT: &str = "What would you like to do?";

/// Everything the main menu offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuAction {
    /// Menu order
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update employee role",
            MenuAction::Exit => "Exit",
        }
    }

    /// Prefix for the message shown when this action hits a database error
    pub fn failure_context(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "Error fetching departments",
            MenuAction::ViewRoles => "Error fetching roles",
            MenuAction::ViewEmployees => "Error fetching employees",
            MenuAction::AddDepartment => "Error adding department",
            MenuAction::AddRole => "Error adding role",
            MenuAction::AddEmployee => "Error adding employee",
            MenuAction::UpdateEmployeeRole => "Error updating employee role",
            MenuAction::Exit => "Error exiting",
        }
    }

    /// Short name used in log spans
    pub fn log_name(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "view_departments",
            MenuAction::ViewRoles => "view_roles",
            MenuAction::ViewEmployees => "view_employees",
            MenuAction::AddDepartment => "add_department",
            MenuAction::AddRole => "add_role",
            MenuAction::AddEmployee => "add_employee",
            MenuAction::UpdateEmployeeRole => "update_employee_role",
            MenuAction::Exit => "exit",
        }
    }

    pub fn choices() -> Vec<Choice<MenuAction>> {
        Self::ALL
            .iter()
            .map(|a| Choice::new(a.label(), *a))
            .collect()
    }
}
