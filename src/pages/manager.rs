use super::*;
use crate::model::NewAccount;

pub fn manager_homepage<S: TokenStore>(svc: &FitnessService<S>) -> PageOutcome {
    let claims = match guarded(svc, Role::Manager) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    PageView::new(format!("Welcome, {}!", display_name(&claims, "Manager")))
        .line("This is your homepage. Access all your functionality below.")
        .line(format!("Go to Dashboard: {}", Route::ManagerDashboard))
        .render()
}

/// Manager dashboard, optionally submitting the create-trainer form.
pub fn manager_dashboard<S: TokenStore>(
    svc: &FitnessService<S>,
    form: Option<NewAccount>,
) -> PageOutcome {
    let view = PageView::new("Manager Dashboard")
        .line(format!("Create Trainer: {}", Route::ManagerCreateTrainer))
        .line("Logout: fitcoach logout");
    trainer_form(svc, view, form)
}

pub fn create_trainer_page<S: TokenStore>(
    svc: &FitnessService<S>,
    form: Option<NewAccount>,
) -> PageOutcome {
    let view = PageView::new("Create New Trainer")
        .line("First Name")
        .line("Last Name")
        .line("Email")
        .line("Password");
    trainer_form(svc, view, form)
}

fn trainer_form<S: TokenStore>(
    svc: &FitnessService<S>,
    view: PageView,
    form: Option<NewAccount>,
) -> PageOutcome {
    if let Err(redirect) = guarded(svc, Role::Manager) {
        return redirect;
    }
    let Some(form) = form else {
        return view.render();
    };
    if !form.is_complete() {
        return view.with_error("All fields are required.").render();
    }

    match svc.create_trainer(form) {
        Ok(trainer) => {
            tracing::info!(user_id = trainer.user_id, "trainer created");
            PageOutcome::redirect_with_notice(
                Route::ManagerDashboard,
                "Trainer created successfully!",
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "create trainer failed");
            view.with_error("Failed to create trainer. Please try again.")
                .render()
        }
    }
}
