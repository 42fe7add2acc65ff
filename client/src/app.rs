// client/src/app.rs
use std::time::{Duration, Instant};

use iced::futures::channel::mpsc::UnboundedSender;
use iced::{Element, Length, Subscription, Task};
use iced_widget::{column, container, horizontal_rule};
use schafkopf_client::scene::ENTRANCE_DURATION;
use schafkopf_client::{validate_name, Reconciler};
use schafkopf_protocol::ClientToServer;

use crate::messages::Msg;
use crate::ui::hand::hand_view;
use crate::ui::prompt::prompt_view;
use crate::ui::shared::{header_view, log_view, name_input_view};
use crate::ui::table::table_view;
use crate::ui::ws::subscription;

const LOG_LIMIT: usize = 400;

pub struct App {
    pub url: String,
    pub name: String,
    pub name_confirmed: bool,
    pub name_error: Option<String>,

    pub connected: bool,
    /// Bumped on every reconnect so the websocket subscription restarts.
    pub attempt: u32,

    pub reconciler: Reconciler<Option<UnboundedSender<ClientToServer>>>,
    pub rendered_at: Instant,

    pub log: Vec<String>,
    pub show_log: bool,
}

impl App {
    pub fn new(url: String, name: Option<String>) -> Self {
        let name_confirmed = name.is_some();
        Self {
            url,
            name: name.unwrap_or_default(),
            name_confirmed,
            name_error: None,
            connected: false,
            attempt: 0,
            reconciler: Reconciler::new(None),
            rendered_at: Instant::now(),
            log: Vec::new(),
            show_log: false,
        }
    }

    fn log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    pub(crate) fn update(&mut self, msg: Msg) -> Task<Msg> {
        match msg {
            Msg::NameChanged(s) => {
                self.name = s;
                self.name_error = None;
            }
            Msg::ConfirmName => match validate_name(&self.name) {
                Ok(name) => {
                    self.name = name;
                    self.name_error = None;
                    self.name_confirmed = true;
                }
                Err(e) => self.name_error = Some(e.to_string()),
            },

            Msg::WsConnected(tx) => {
                self.reconciler.replace_sink(Some(tx));
                self.connected = true;
                self.log(format!("connected to {}", self.url));
                let name = self.name.clone();
                if let Err(e) = self.reconciler.login(&name) {
                    self.log(format!("[login] {e}"));
                }
            }
            Msg::WsFrame(text) => match self.reconciler.reconcile(&text) {
                Ok(_) => self.rendered_at = Instant::now(),
                Err(e) => self.log(format!("[decode] {e}")),
            },
            Msg::WsError(e) => {
                self.log(format!("[ws] {}: {}", self.url, e));
                self.connected = false;
                self.reconciler.replace_sink(None);
            }
            Msg::Reconnect => {
                self.attempt = self.attempt.wrapping_add(1);
                self.log(format!("reconnecting to {}", self.url));
            }

            Msg::Activate(action) => {
                if let Err(e) = self.reconciler.send_action(action) {
                    self.log(format!("[action] {e}"));
                }
            }

            Msg::Tick => {}
            Msg::ToggleLog => self.show_log = !self.show_log,
        }
        Task::none()
    }

    fn animating(&self) -> bool {
        self.reconciler.interface().is_animating() && self.rendered_at.elapsed() < ENTRANCE_DURATION
    }

    pub fn subscription(&self) -> Subscription<Msg> {
        if !self.name_confirmed {
            return Subscription::none();
        }
        let ws = subscription(self.url.clone(), self.attempt);
        if self.animating() {
            let tick = iced::time::every(Duration::from_millis(16)).map(|_| Msg::Tick);
            Subscription::batch(vec![ws, tick])
        } else {
            ws
        }
    }

    pub(crate) fn view(&self) -> Element<Msg> {
        if !self.name_confirmed {
            return name_input_view(&self.name, &self.name_error);
        }

        let interface = self.reconciler.interface();
        let elapsed = self.rendered_at.elapsed();

        let mut content = column![
            header_view(self),
            horizontal_rule(1),
            table_view(interface, elapsed),
            prompt_view(&interface.prompt),
            hand_view(&interface.hand),
        ]
        .spacing(12)
        .padding(16);

        if self.show_log {
            content = content.push(horizontal_rule(1)).push(log_view(&self.log));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
