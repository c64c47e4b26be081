use super::{
    repository::ManageUsersRepository,
    utils::{RowOperation, RowUpdates},
};
use crate::{
    api::{ApiClient, ApiError, User},
    session::Role,
    state::{
        notify::{use_notifier, Notifier},
        session::{use_session, SessionContext},
    },
};
use leptos::*;
use std::rc::Rc;

/// Everything a row operation touches.
#[derive(Clone)]
pub struct RowContext {
    pub repository: ManageUsersRepository,
    pub users: RwSignal<Vec<User>>,
    pub updates: RwSignal<RowUpdates>,
    pub notifier: Notifier,
    pub session: SessionContext,
}

impl RowContext {
    fn begin(&self, id: &str, operation: RowOperation) -> bool {
        self.updates
            .try_update(|updates| updates.begin(id, operation))
            .unwrap_or(false)
    }

    fn finish(&self, id: &str) {
        let _ = self.updates.try_update(|updates| updates.finish(id));
    }

    fn patch(&self, id: &str, f: impl FnOnce(&mut User)) {
        let _ = self.users.try_update(|users| {
            if let Some(user) = users.iter_mut().find(|user| user.id == id) {
                f(user);
            }
        });
    }

    fn fail(&self, error: Option<&ApiError>, message: String) {
        if let Some(error) = error {
            self.session.handle_error(error);
            log::error!("row update failed: {}", error);
        }
        self.notifier.error(message);
    }
}

/// Reassigns `id` to `role`. The row only changes once the backend accepts.
pub async fn apply_role_change(ctx: RowContext, id: String, role: Role) -> bool {
    if !ctx.begin(&id, RowOperation::ChangeRole(role)) {
        return false;
    }
    let accepted = match ctx.repository.change_role(&id, role).await {
        Ok(response) if response.success => {
            ctx.patch(&id, |user| user.role = role);
            ctx.notifier.success("Role updated successfully");
            true
        }
        Ok(response) => {
            ctx.fail(None, response.message_or("Failed to update role"));
            false
        }
        Err(error) => {
            ctx.fail(Some(&error), "Failed to update role".to_string());
            false
        }
    };
    ctx.finish(&id);
    accepted
}

/// Blocks an active user or unblocks a blocked one.
pub async fn toggle_block(ctx: RowContext, id: String) -> bool {
    let Some(blocked) = ctx
        .users
        .try_with_untracked(|users| users.iter().find(|user| user.id == id).map(User::is_blocked))
        .flatten()
    else {
        return false;
    };
    let operation = if blocked {
        RowOperation::Unblock
    } else {
        RowOperation::Block
    };
    if !ctx.begin(&id, operation) {
        return false;
    }

    let accepted = match ctx.repository.set_blocked(&id, !blocked).await {
        Ok(response) if response.success => {
            ctx.patch(&id, |user| user.is_verified = blocked);
            ctx.notifier
                .success(if blocked { "User unblocked" } else { "User blocked" });
            true
        }
        Ok(response) => {
            ctx.fail(None, response.message_or("Action failed"));
            false
        }
        Err(error) => {
            ctx.fail(Some(&error), "Action failed".to_string());
            false
        }
    };
    ctx.finish(&id);
    accepted
}

#[derive(Clone, Copy)]
pub struct ManageUsersViewModel {
    pub users_resource: Resource<(), Result<Vec<User>, ApiError>>,
    pub users: RwSignal<Vec<User>>,
    pub updates: RwSignal<RowUpdates>,
    pub role_action: Action<(String, Role), bool>,
    pub block_action: Action<String, bool>,
}

pub fn use_manage_users_view_model() -> ManageUsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ManageUsersRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let session = use_session();

    let users = create_rw_signal(Vec::<User>::new());
    let updates = create_rw_signal(RowUpdates::default());

    let repo_for_resource = repository.clone();
    let users_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_users().await }
        },
    );

    create_effect(move |_| match users_resource.get() {
        Some(Ok(loaded)) => users.set(loaded),
        Some(Err(error)) => {
            session.handle_error(&error);
        }
        None => {}
    });

    let ctx = RowContext {
        repository,
        users,
        updates,
        notifier,
        session,
    };

    let role_ctx = ctx.clone();
    let role_action = create_action(move |(id, role): &(String, Role)| {
        apply_role_change(role_ctx.clone(), id.clone(), *role)
    });

    let block_action = create_action(move |id: &String| toggle_block(ctx.clone(), id.clone()));

    ManageUsersViewModel {
        users_resource,
        users,
        updates,
        role_action,
        block_action,
    }
}
