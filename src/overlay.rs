/*
 * Overlay Module
 *
 * The two page widgets that sit on top of the background: the navigation
 * toggle that switches the link list into its mobile layout, and the
 * registration form, whose submission is intercepted and answered with a
 * fixed notice. Neither sends nor stores anything.
 */

use nannou_egui::egui;
use tracing::debug;

pub const NAV_LINKS: [&str; 3] = ["Home", "Vulnerabilities", "Sign in"];

pub const REGISTRATION_NOTICE: &str =
    "Registration is temporarily suspended, request credentials from the administrator.";

#[derive(Debug, Default)]
pub struct NavToggle {
    pub mobile: bool,
}

impl NavToggle {
    // Flip the mobile layout of the nav links
    pub fn toggle(&mut self) {
        self.mobile = !self.mobile;
        debug!(mobile = self.mobile, "navigation toggled");
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if ui.button("Menu").clicked() {
            self.toggle();
        }
        if self.mobile {
            for link in NAV_LINKS {
                ui.label(link);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub login: String,
    pub password: String,
    pub notice: Option<&'static str>,
}

impl RegistrationForm {
    // Swallow the submission and show the notice; the entered values stay put
    pub fn submit(&mut self) {
        self.notice = Some(REGISTRATION_NOTICE);
        debug!("registration submission intercepted");
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Login");
            ui.text_edit_singleline(&mut self.login);
        });
        ui.horizontal(|ui| {
            ui.label("Password");
            ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
        });
        if ui.button("Register").clicked() {
            self.submit();
        }

        if let Some(notice) = self.notice {
            ui.separator();
            ui.label(notice);
            if ui.button("OK").clicked() {
                self.dismiss();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut nav = NavToggle::default();
        assert!(!nav.mobile);
        nav.toggle();
        assert!(nav.mobile);
        nav.toggle();
        assert!(!nav.mobile);
    }

    #[test]
    fn submit_shows_the_fixed_notice_without_touching_input() {
        let mut form = RegistrationForm {
            login: "analyst".to_owned(),
            password: "secret".to_owned(),
            notice: None,
        };
        form.submit();
        assert_eq!(form.notice, Some(REGISTRATION_NOTICE));
        assert_eq!(form.login, "analyst");
        assert_eq!(form.password, "secret");

        // Submitting twice shows the same notice
        form.submit();
        assert_eq!(form.notice, Some(REGISTRATION_NOTICE));

        form.dismiss();
        assert_eq!(form.notice, None);
    }
}
