//! Role-scoped authorization.
//!
//! Every business operation starts by building an [`Access`] for the resolved
//! caller and calling the entry point matching what it is about to do. Each entry
//! point consults the coarse [`table`] first, then the target-level
//! [`ownership`] guard or the listing [`scope`] filter, and returns the first
//! denial it meets.
//!
//! Callers load the target before authorizing it, so a missing target surfaces
//! as `NotFound` ahead of any access decision. With `mask_forbidden_reads`
//! enabled, a denied read on a target the caller could not see in a listing
//! also surfaces as `NotFound`.

pub mod ownership;
pub mod scope;
pub mod table;

#[cfg(test)]
mod test;

use crate::server::{
    access::{
        ownership::{check_access, Target},
        scope::{scope_query, EffectiveScope, RequestedScope},
        table::{Operation, OperationKind, Resource},
    },
    error::{auth::AuthError, AppError},
    model::{
        account::{Account, CreateAccountParam, UpdateAccountParam},
        team::CreateTeamParam,
    },
};

use entity::sea_orm_active_enums::Role;

/// Authorization entry points for one resolved caller.
pub struct Access<'a> {
    caller: &'a Account,
    mask_forbidden_reads: bool,
}

impl<'a> Access<'a> {
    pub fn new(caller: &'a Account) -> Self {
        Self {
            caller,
            mask_forbidden_reads: false,
        }
    }

    /// Reports denied reads outside the caller's listing scope as not found.
    pub fn mask_forbidden_reads(mut self, mask: bool) -> Self {
        self.mask_forbidden_reads = mask;
        self
    }

    pub fn caller(&self) -> &'a Account {
        self.caller
    }

    /// Authorizes reading a single loaded target.
    pub fn authorize_read(&self, resource: Resource, target: Target<'_>) -> Result<(), AppError> {
        match self.authorize(resource, OperationKind::Read, &target) {
            Err(AuthError::Forbidden(reason)) if self.mask_forbidden_reads => {
                let visible = scope_query(self.caller, resource, RequestedScope::default())
                    .is_ok_and(|scope| scope.includes(&target));

                if visible {
                    Err(AppError::forbidden(reason))
                } else {
                    tracing::debug!(
                        "Masking denied read of {} for account {}: {}",
                        resource.name(),
                        self.caller.id,
                        reason
                    );
                    Err(AppError::NotFound(format!("{} not found", resource.name())))
                }
            }
            result => result.map_err(AppError::from),
        }
    }

    /// Authorizes a listing and returns the scope the query must be run with.
    pub fn authorize_list(
        &self,
        resource: Resource,
        requested: RequestedScope,
    ) -> Result<EffectiveScope, AppError> {
        self.permit(Operation::new(resource, OperationKind::List))?;

        Ok(scope_query(self.caller, resource, requested)?)
    }

    /// Authorizes creating a record under `parent`, the entity the new record
    /// will belong to.
    pub fn authorize_create(&self, resource: Resource, parent: Target<'_>) -> Result<(), AppError> {
        Ok(self.authorize(resource, OperationKind::Create, &parent)?)
    }

    pub fn authorize_update(&self, resource: Resource, target: Target<'_>) -> Result<(), AppError> {
        Ok(self.authorize(resource, OperationKind::Update, &target)?)
    }

    pub fn authorize_delete(&self, resource: Resource, target: Target<'_>) -> Result<(), AppError> {
        Ok(self.authorize(resource, OperationKind::Delete, &target)?)
    }

    /// Authorizes an account creation and returns the parameters to persist.
    ///
    /// Managers always create Members on their own team: role and team from the
    /// payload are replaced, not validated. Administrator accounts never carry a
    /// team.
    pub fn authorize_account_create(
        &self,
        mut param: CreateAccountParam,
    ) -> Result<CreateAccountParam, AppError> {
        self.permit(Operation::new(Resource::Account, OperationKind::Create))?;

        if self.caller.is_manager() {
            let Some(team_id) = self.caller.team_id else {
                return Err(AppError::forbidden("manager has no team"));
            };

            param.role = Role::Member;
            param.team_id = Some(team_id);
        } else if param.role == Role::Administrator {
            param.team_id = None;
        }

        Ok(param)
    }

    /// Authorizes an account update. Role and team changes are reserved to
    /// Administrators.
    pub fn authorize_account_update(
        &self,
        target: &Account,
        param: &UpdateAccountParam,
    ) -> Result<(), AppError> {
        self.authorize_update(Resource::Account, Target::Account(target))?;

        if !self.caller.is_administrator() && param.changes_privileges(target) {
            return Err(AppError::forbidden(
                "only administrators can change role or team",
            ));
        }

        Ok(())
    }

    /// Authorizes a team creation and returns the parameters to persist.
    ///
    /// A Manager founds a team for themselves and must not lead one already.
    /// Administrators may name any manager, or none.
    pub fn authorize_team_create(
        &self,
        mut param: CreateTeamParam,
    ) -> Result<CreateTeamParam, AppError> {
        self.permit(Operation::new(Resource::Team, OperationKind::Create))?;

        if self.caller.is_manager() {
            if self.caller.team_id.is_some() {
                return Err(AppError::forbidden("manager already has a team"));
            }

            param.manager_id = Some(self.caller.id);
        }

        Ok(param)
    }

    fn authorize(
        &self,
        resource: Resource,
        kind: OperationKind,
        target: &Target<'_>,
    ) -> Result<(), AuthError> {
        self.permit(Operation::new(resource, kind))?;

        check_access(self.caller, target, kind)
    }

    fn permit(&self, operation: Operation) -> Result<(), AuthError> {
        if table::permits(operation, self.caller.role) {
            return Ok(());
        }

        Err(AuthError::Forbidden(format!(
            "{} may not {} {}",
            self.caller.role.as_str().to_lowercase(),
            verb(operation.kind),
            operation.resource.name().to_lowercase()
        )))
    }
}

fn verb(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::List => "list",
        OperationKind::Read => "read",
        OperationKind::Create => "create",
        OperationKind::Update => "update",
        OperationKind::Delete => "delete",
    }
}
