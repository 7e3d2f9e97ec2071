use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use nx_core::ports::UiPort;
use nx_core::{Alert, Route};

/// [`UiPort`] that prints to a terminal.
///
/// Alerts become `title: message` lines; navigation is echoed as the route
/// path so scripted callers can follow the flow.
pub struct TerminalUi<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalUi<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalUi<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write_line(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            log::warn!("Terminal writer lock poisoned; dropping output");
            return;
        };
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            log::warn!("Failed to write to terminal: {err}");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> UiPort for TerminalUi<W> {
    async fn navigate(&self, route: Route) {
        self.write_line(&format!("-> {}", route.path()));
    }

    async fn alert(&self, alert: Alert) {
        self.write_line(&format!("{}: {}", alert.title, alert.message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prints_alerts_and_routes() {
        let ui = TerminalUi::new(Vec::new());

        ui.alert(Alert::new("Login failed", "Incorrect username or password"))
            .await;
        ui.navigate(Route::Home).await;

        let printed = String::from_utf8(ui.into_inner()).unwrap();
        assert_eq!(
            printed,
            "Login failed: Incorrect username or password\n-> /home\n"
        );
    }
}
