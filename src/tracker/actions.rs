//! Menu action handlers
//!
//! Each handler follows the same shape: fetch whatever reference data its
//! choices need, prompt, issue one statement, confirm.

use crate::db::{Database, Param, QueryResults};
use crate::error::Result;
use crate::model::{Department, EmployeeOption, RoleOption, decode_all};
use crate::prompt::{Choice, Prompter, select_choice};
use crate::render::render_table;
use crate::tracker::Tracker;
use crate::tracker::input::parse_salary;
use crate::tracker::queries;
use rust_decimal::Decimal;

impl<D: Database, P: Prompter> Tracker<D, P> {
    pub(crate) async fn view_departments(&mut self) -> Result<()> {
        self.show(queries::VIEW_DEPARTMENTS).await
    }

    pub(crate) async fn view_roles(&mut self) -> Result<()> {
        self.show(queries::VIEW_ROLES).await
    }

    pub(crate) async fn view_employees(&mut self) -> Result<()> {
        self.show(queries::VIEW_EMPLOYEES).await
    }

    pub(crate) async fn add_department(&mut self) -> Result<()> {
        let name = self
            .prompter
            .input("Enter the name of the new department:")?;

        self.db
            .query(queries::INSERT_DEPARTMENT, &[Param::Text(name.clone())])
            .await?;
        tracing::info!(%name, "department added");
        self.prompter
            .say(&format!("Department \"{}\" added successfully!", name));
        Ok(())
    }

    pub(crate) async fn add_role(&mut self) -> Result<()> {
        let departments = self.departments().await?;
        if departments.is_empty() {
            self.prompter
                .warn("No departments found. Add a department first.");
            return Ok(());
        }

        let title = self.prompter.input("Enter the title for the new role:")?;
        let salary = self.prompt_salary("Enter the salary for the new role:")?;
        let choices: Vec<Choice<i32>> = departments
            .into_iter()
            .map(|d| Choice::new(d.name, d.id))
            .collect();
        let department_id = select_choice(
            &mut self.prompter,
            "Select the department for the new role:",
            &choices,
        )?;

        self.db
            .query(
                queries::INSERT_ROLE,
                &[
                    Param::Text(title.clone()),
                    Param::Numeric(salary),
                    Param::Int(department_id),
                ],
            )
            .await?;
        tracing::info!(%title, %salary, department_id, "role added");
        self.prompter
            .say(&format!("Role \"{}\" added successfully!", title));
        Ok(())
    }

    pub(crate) async fn add_employee(&mut self) -> Result<()> {
        let roles = self.roles().await?;
        let employees = self.employees().await?;
        if roles.is_empty() {
            self.prompter.warn("No roles found. Add a role first.");
            return Ok(());
        }

        let first_name = self.prompter.input("Enter the employee's first name:")?;
        let last_name = self.prompter.input("Enter the employee's last name:")?;
        let role_id = select_choice(
            &mut self.prompter,
            "Select the employee's role:",
            &role_choices(roles),
        )?;

        let mut managers = vec![Choice::new("None", None)];
        managers.extend(
            employees
                .into_iter()
                .map(|e| Choice::new(e.full_name(), Some(e.id))),
        );
        let manager_id = select_choice(
            &mut self.prompter,
            "Select the employee's manager:",
            &managers,
        )?;

        self.db
            .query(
                queries::INSERT_EMPLOYEE,
                &[
                    Param::Text(first_name.clone()),
                    Param::Text(last_name.clone()),
                    Param::Int(role_id),
                    Param::optional_int(manager_id),
                ],
            )
            .await?;
        tracing::info!(%first_name, %last_name, role_id, ?manager_id, "employee added");
        self.prompter.say(&format!(
            "Employee \"{} {}\" added successfully!",
            first_name, last_name
        ));
        Ok(())
    }

    pub(crate) async fn update_employee_role(&mut self) -> Result<()> {
        let employees = self.employees().await?;
        let roles = self.roles().await?;
        if employees.is_empty() {
            self.prompter
                .warn("No employees found. Add an employee first.");
            return Ok(());
        }
        if roles.is_empty() {
            self.prompter.warn("No roles found. Add a role first.");
            return Ok(());
        }

        let people: Vec<Choice<i32>> = employees
            .into_iter()
            .map(|e| Choice::new(e.full_name(), e.id))
            .collect();
        let employee_id =
            select_choice(&mut self.prompter, "Select the employee to update:", &people)?;
        let role_id = select_choice(
            &mut self.prompter,
            "Select the new role:",
            &role_choices(roles),
        )?;

        let result = self
            .db
            .query(
                queries::UPDATE_EMPLOYEE_ROLE,
                &[Param::Int(role_id), Param::Int(employee_id)],
            )
            .await?;

        // The employee list may be stale if someone else removed the row
        if result.row_count == 0 {
            tracing::debug!(employee_id, "update matched no employee");
            self.prompter
                .warn("No employee was updated; the selected employee no longer exists.");
            return Ok(());
        }
        tracing::info!(employee_id, role_id, "employee role updated");
        self.prompter.say("Employee role updated successfully!");
        Ok(())
    }

    async fn show(&mut self, sql: &str) -> Result<()> {
        let results = self.db.query(sql, &[]).await?;
        self.prompter.say(&render_table(&results, self.style));
        Ok(())
    }

    /// Keep asking until the answer parses as a number
    fn prompt_salary(&mut self, message: &str) -> Result<Decimal> {
        loop {
            let raw = self.prompter.input(message)?;
            match parse_salary(&raw) {
                Ok(salary) => return Ok(salary),
                Err(reason) => {
                    tracing::debug!(input = %raw, ?reason, "rejected salary");
                    self.prompter.warn(&reason.to_string());
                }
            }
        }
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        let results = self.fetch(queries::DEPARTMENT_OPTIONS).await?;
        Ok(decode_all(&results, Department::from_record)?)
    }

    async fn roles(&self) -> Result<Vec<RoleOption>> {
        let results = self.fetch(queries::ROLE_OPTIONS).await?;
        Ok(decode_all(&results, RoleOption::from_record)?)
    }

    async fn employees(&self) -> Result<Vec<EmployeeOption>> {
        let results = self.fetch(queries::EMPLOYEE_OPTIONS).await?;
        Ok(decode_all(&results, EmployeeOption::from_record)?)
    }

    async fn fetch(&self, sql: &str) -> Result<QueryResults> {
        Ok(self.db.query(sql, &[]).await?)
    }
}

fn role_choices(roles: Vec<RoleOption>) -> Vec<Choice<i32>> {
    roles
        .into_iter()
        .map(|r| Choice::new(r.title, r.id))
        .collect()
}
