use super::*;
use crate::remote::ApiError;

pub fn client_homepage<S: TokenStore>(svc: &FitnessService<S>) -> PageOutcome {
    let claims = match guarded(svc, Role::Client) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    PageView::new(format!("Welcome, {}!", display_name(&claims, "Client")))
        .line("This is your homepage. Access all your functionality below.")
        .line(format!("Go to Dashboard: {}", Route::ClientDashboard))
        .render()
}

pub fn client_dashboard<S: TokenStore>(svc: &FitnessService<S>, tab: ClientTab) -> PageOutcome {
    let claims = match guarded(svc, Role::Client) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    let mut view = PageView::new("Client Dashboard");

    match tab {
        ClientTab::Dashboard => {
            view.push(format!("Welcome, {}!", display_name(&claims, "User")));
            view.push("Use the tabs to view your workout programs or profile.");
            view.push("Tabs: dashboard, workouts, profile");
        }
        ClientTab::Workouts => {
            view.push("Your Workout Programs");
            match svc.list_client_programs() {
                Ok(programs) if programs.is_empty() => {
                    view.push("No workout programs available.");
                }
                Ok(programs) => {
                    for program in &programs {
                        view.lines.extend(program_lines(program));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not load client programs");
                    view.fail("Failed to load workout programs.");
                }
            }
        }
        ClientTab::Profile => {
            view.push("Profile");
            view.lines.extend(profile_lines(&claims));
            match svc.get_trainer() {
                Ok(trainer) => view.push(format!(
                    "Personal Trainer: {} <{}>",
                    trainer.full_name(),
                    trainer.email
                )),
                Err(err @ ApiError::TrainerNotSet) => view.push(err.to_string()),
                Err(err) => tracing::warn!(error = %err, "could not load trainer"),
            }
        }
    }

    view.render()
}
