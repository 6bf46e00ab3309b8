use std::time::{Duration, Instant};

use crate::components::{header, tabs};
use crate::screens::{actions, login, logs, obs};
use crate::theme::CssVars;
use crate::{Toasts, UiRouter};
use eframe::egui;

use tedbot_app_core::{AppCommand, AppKernel, LocalBackend, Route, Tab};

pub type UiKernel = AppKernel<UiRouter, Toasts, LocalBackend>;

pub struct TedbotUiApp {
    kernel: UiKernel,
    css: CssVars,
    login: login::LoginForm,
    action_form: actions::ActionForm,
    last_route: Route,
}

impl TedbotUiApp {
    pub fn new(kernel: UiKernel, css: CssVars) -> Self {
        let last_route = kernel.navigator().current();
        Self {
            kernel,
            css,
            login: login::LoginForm::default(),
            action_form: actions::ActionForm::default(),
            last_route,
        }
    }

    fn on_route_change(&mut self) {
        let route = self.kernel.navigator().current();
        if route == self.last_route {
            return;
        }
        self.last_route = route;
        if route == Route::Bot {
            self.kernel.dispatch(AppCommand::RefreshActions);
            self.kernel.dispatch(AppCommand::RefreshLog);
            self.kernel.dispatch(AppCommand::RefreshObs);
        }
    }
}

impl eframe::App for TedbotUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.kernel.tick();
        self.on_route_change();

        let accent = self.css.primary();
        let route = self.kernel.navigator().current();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let session = &self.kernel.state().session;
            let resp = header::draw(
                ui,
                session.username(),
                self.kernel.is_busy(),
                session.debug,
                accent,
            );
            if resp.logout_clicked {
                self.kernel.dispatch(AppCommand::Logout);
            }
            if let Some(debug) = resp.debug_changed {
                self.kernel.dispatch(AppCommand::SetDebug(debug));
            }

            if route == Route::Bot {
                let current = self.kernel.state().session.current_tab;
                if let Some(tab) = tabs::draw(ui, current) {
                    self.kernel.dispatch(AppCommand::SelectTab(tab));
                    match tab {
                        Tab::Logs => self.kernel.dispatch(AppCommand::RefreshLog),
                        Tab::Obs => self.kernel.dispatch(AppCommand::RefreshObs),
                        Tab::Actions => {}
                    }
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Login => login::draw(ui, &mut self.kernel, &mut self.login, accent),
            Route::Bot => match self.kernel.state().session.current_tab {
                Tab::Actions => actions::draw(ui, &mut self.kernel, &mut self.action_form, accent),
                Tab::Obs => obs::draw(ui, &mut self.kernel, accent),
                Tab::Logs => logs::draw(ui, &mut self.kernel, accent),
            },
        });

        let now = Instant::now();
        let toasts = self.kernel.notifier_mut();
        toasts.expire(now);
        toasts.draw(ctx, now);

        // Workers report over a channel, so poll until they are done.
        if self.kernel.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
