//! One module per page. Pages render the derived state the controller
//! holds; every click that changes data goes back through the app's load
//! or mutation methods.

pub mod assignments;
pub mod dashboard;
pub mod notifications;
pub mod settings;
pub mod subjects;
