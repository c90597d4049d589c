use crate::domain::customer::NewCustomer;
use crate::forms::signup::SignupForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::state::{Action, SUBMIT_FALLBACK_ERROR, SignupState};

/// Outcome of [`submit_signup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitResult {
    /// Form invalid or a submission already in flight; nothing was sent.
    Blocked,
    Created,
    Rejected,
}

/// Fetches the customer list into the state.
///
/// A failed load keeps the previous list and is only logged.
pub async fn load_customers<R>(repo: &R, state: &mut SignupState)
where
    R: CustomerReader,
{
    match repo.list_customers().await {
        Ok(customers) => {
            log::info!("Loaded {} customers", customers.len());
            state.apply(Action::CustomersLoaded(customers));
        }
        Err(err) => {
            log::error!("Failed to load customers: {err}");
            state.apply(Action::CustomersLoadFailed);
        }
    }
}

/// Reloads the list when the refresh counter moved since the last load.
pub async fn refresh_if_needed<R>(repo: &R, state: &mut SignupState) -> bool
where
    R: CustomerReader,
{
    if !state.needs_reload() {
        return false;
    }
    load_customers(repo, state).await;
    true
}

/// Creates the component state and performs the initial list load.
pub async fn mount<R>(repo: &R) -> SignupState
where
    R: CustomerReader,
{
    let mut state = SignupState::new();
    refresh_if_needed(repo, &mut state).await;
    state
}

/// Message shown to the user for a failed submission.
fn submit_error_message(err: &RepositoryError) -> String {
    match err {
        RepositoryError::Rejected {
            message: Some(message),
            ..
        } if !message.is_empty() => message.clone(),
        _ => SUBMIT_FALLBACK_ERROR.to_string(),
    }
}

/// Validates the form and, when allowed, sends it to the backend.
///
/// A successful create resets the form and reloads the list once.
pub async fn submit_signup<R>(repo: &R, state: &mut SignupState) -> SubmitResult
where
    R: CustomerReader + CustomerWriter,
{
    state.apply(Action::SubmitAttempted);
    if !state.form.can_submit() {
        return SubmitResult::Blocked;
    }

    let new_customer = match NewCustomer::try_from(&state.form.values) {
        Ok(new_customer) => new_customer,
        Err(err) => {
            log::error!("Failed to build customer payload: {err}");
            return SubmitResult::Blocked;
        }
    };

    state.apply(Action::SubmitStarted);

    match repo.create_customer(&new_customer).await {
        Ok(()) => {
            log::info!(
                "Created customer {} <{}>",
                new_customer.name, new_customer.email
            );
            state.apply(Action::SubmitSucceeded);
            refresh_if_needed(repo, state).await;
            SubmitResult::Created
        }
        Err(err) => {
            log::error!("Failed to create customer: {err}");
            state.apply(Action::SubmitFailed(submit_error_message(&err)));
            SubmitResult::Rejected
        }
    }
}

/// Handles a whole-page form post: mount, replay the typed values, submit.
pub async fn handle_submission<R>(repo: &R, form: SignupForm) -> SignupState
where
    R: CustomerReader + CustomerWriter,
{
    let mut state = mount(repo).await;
    for (field, value) in form.into_fields() {
        state.apply(Action::FieldChanged(field, value));
    }
    submit_signup(repo, &mut state).await;
    state
}
