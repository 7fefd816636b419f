use dioxus::prelude::*;
use shared_types::mock::demo_user_for_role;
use shared_types::{StaffRole, User};

/// Global session state. There is no real authentication; picking a role on
/// the selector screen signs in that role's demo account.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<User>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn select_role(&mut self, role: StaffRole) {
        let user = demo_user_for_role(role);
        tracing::info!(role = role.as_str(), user = %user.name, "role selected");
        self.current_user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        tracing::info!("signed out");
        self.current_user.set(None);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The signed-in role, if any.
pub fn use_staff_role() -> Option<StaffRole> {
    let session = use_session();
    let binding = session.current_user.read();
    binding.as_ref().map(|u| u.role)
}

/// Which navbar sections are visible for the current role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavVisibility {
    pub tasks: bool,
    pub leaves: bool,
    pub tickets: bool,
    pub payslips: bool,
    pub holidays: bool,
}

pub fn use_nav_visibility() -> NavVisibility {
    match use_staff_role() {
        Some(StaffRole::Employee) => NavVisibility {
            tasks: true,
            leaves: true,
            tickets: true,
            payslips: true,
            holidays: true,
        },
        Some(StaffRole::Hr) => NavVisibility {
            tasks: false,
            leaves: true,
            tickets: true,
            payslips: true,
            holidays: true,
        },
        Some(StaffRole::Admin) => NavVisibility {
            tasks: false,
            leaves: true,
            tickets: true,
            payslips: false,
            holidays: true,
        },
        None => NavVisibility {
            tasks: false,
            leaves: false,
            tickets: false,
            payslips: false,
            holidays: false,
        },
    }
}

/// Search text entered in the navbar, shared with every section page.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub query: Signal<String>,
}
