use crate::app::state::App;
use crate::server::StartOutcome;
use crate::status::ToastState;

impl App {
    pub fn start_server(&mut self) {
        if !self.npm_available {
            self.set_toast(
                ToastState::Error,
                "Cannot start: npm not found on this machine",
                5,
            );
            return;
        }

        match self.supervisor.start(&self.sink) {
            StartOutcome::Started => {
                self.set_toast(ToastState::Success, "Starting the dev server", 3);
            }
            StartOutcome::AlreadyRunning => {
                self.set_toast(ToastState::Info, "Server is already running", 3);
            }
        }
    }

    pub fn stop_server(&mut self) {
        // Stop with nothing running is deliberately silent.
        if !self.supervisor.is_running() {
            return;
        }
        self.supervisor.stop(&self.sink);
        self.set_toast(ToastState::Success, "Server stopped", 3);
    }

    pub fn open_website_only(&mut self) {
        self.sink
            .push(format!("Opening the browser at {} ...", self.site_url));
        if let Err(err) = crate::server::browser::open_url(&self.site_url) {
            self.sink.push(format!("Could not open the browser: {err}"));
            self.set_toast(ToastState::Error, "Could not open the browser", 4);
        }
    }

    /// Quit was requested. Returns true when the app may exit immediately;
    /// with a server still running the confirmation overlay takes over.
    pub fn request_exit(&mut self) -> bool {
        if self.supervisor.is_running() {
            self.confirm_exit_mode = true;
            false
        } else {
            true
        }
    }

    /// Confirmation accepted: stop the server, then exit.
    pub fn confirm_exit(&mut self) {
        self.supervisor.stop(&self.sink);
    }
}
