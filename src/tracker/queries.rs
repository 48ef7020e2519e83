//! SQL issued by the tracker
//!
//! Listings keep whatever order the database returns; nothing here sorts.

pub const VIEW_DEPARTMENTS: &str = "SELECT id, name FROM department";

pub const VIEW_ROLES: &str = "SELECT role.id, role.title, department.name AS department, role.salary \
     FROM role \
     JOIN department ON role.department_id = department.id";

// `||` yields NULL when there is no manager row, unlike CONCAT
pub const VIEW_EMPLOYEES: &str = "SELECT e.id, e.first_name, e.last_name, role.title, \
            department.name AS department, role.salary, \
            m.first_name || ' ' || m.last_name AS manager \
     FROM employee e \
     JOIN role ON e.role_id = role.id \
     JOIN department ON role.department_id = department.id \
     LEFT JOIN employee m ON e.manager_id = m.id";

pub const DEPARTMENT_OPTIONS: &str = "SELECT id, name FROM department";

pub const ROLE_OPTIONS: &str = "SELECT id, title FROM role";

pub const EMPLOYEE_OPTIONS: &str = "SELECT id, first_name, last_name FROM employee";

pub const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES ($1)";

pub const INSERT_ROLE: &str = "INSERT INTO role (title, salary, department_id) VALUES ($1, $2, $3)";

pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES ($1, $2, $3, $4)";

pub const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = $1 WHERE id = $2";
