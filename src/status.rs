use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Status {
    #[default]
    Stopped,
    Installing,
    Starting,
    Running,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Stopped => write!(f, "stopped"),
            Status::Installing => write!(f, "installing dependencies"),
            Status::Starting => write!(f, "starting"),
            Status::Running => write!(f, "running"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ToastState {
    Success,
    Warning,
    Error,
    Info,
}
