//! Profile service — member listing, role management, aggregate stats.
//!
//! DESIGN
//! ======
//! Roles are a two-level hierarchy: admins manage plots, the plant catalog,
//! and membership; gardeners work their assigned plots and tasks. Role
//! enforcement happens here rather than in row-level database policies so
//! every route shares one code path.

use sqlx::PgPool;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(Uuid),
    #[error("operation requires admin role")]
    Forbidden,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Membership role. Stored as lowercase text in `profiles.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Gardener,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Gardener => "gardener",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "gardener" => Some(Self::Gardener),
            _ => None,
        }
    }
}

/// Row returned from profile queries.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

/// Aggregate numbers shown on a member's profile.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProfileStats {
    pub plots_assigned: i64,
    pub open_tasks: i64,
}

fn parse_role(raw: &str) -> Role {
    // Constrained by the CHECK on profiles.role; default defensively.
    Role::from_str(raw).unwrap_or(Role::Gardener)
}

// =============================================================================
// QUERIES
// =============================================================================

/// List all profiles, optionally filtered by role, ordered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_profiles(pool: &PgPool, role: Option<Role>) -> Result<Vec<ProfileRow>, ProfileError> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, String)>(
        "SELECT id, email, full_name, role
         FROM profiles
         WHERE $1::text IS NULL OR role = $1
         ORDER BY full_name ASC",
    )
    .bind(role.map(Role::as_str))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, email, full_name, role)| ProfileRow { id, email, full_name, role: parse_role(&role) })
        .collect())
}

/// Fetch one profile by ID.
///
/// # Errors
///
/// Returns `NotFound` if no such profile exists.
pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<ProfileRow, ProfileError> {
    let row = sqlx::query_as::<_, (Uuid, String, String, String)>(
        "SELECT id, email, full_name, role FROM profiles WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ProfileError::NotFound(user_id))?;

    Ok(ProfileRow { id: row.0, email: row.1, full_name: row.2, role: parse_role(&row.3) })
}

/// Aggregate stats for a member: plots currently assigned and open tasks.
///
/// # Errors
///
/// Returns a database error if a query fails.
pub async fn profile_stats(pool: &PgPool, user_id: Uuid) -> Result<ProfileStats, ProfileError> {
    let plots_assigned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM garden_plots WHERE assigned_user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    let open_tasks: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE assigned_user_id = $1 AND status <> 'completed'")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok(ProfileStats { plots_assigned, open_tasks })
}

/// Update a profile's name and/or role.
///
/// Role changes require the caller to be an admin; a member may rename
/// themself.
///
/// # Errors
///
/// Returns `Forbidden` when a non-admin touches another profile or a role,
/// `NotFound` when the target does not exist.
pub async fn update_profile(
    pool: &PgPool,
    caller: &ProfileRow,
    target_id: Uuid,
    full_name: Option<&str>,
    role: Option<Role>,
) -> Result<ProfileRow, ProfileError> {
    let is_self = caller.id == target_id;
    if caller.role != Role::Admin && (!is_self || role.is_some()) {
        return Err(ProfileError::Forbidden);
    }

    let row = sqlx::query_as::<_, (Uuid, String, String, String)>(
        "UPDATE profiles
         SET full_name = COALESCE($2, full_name),
             role = COALESCE($3, role),
             updated_at = now()
         WHERE id = $1
         RETURNING id, email, full_name, role",
    )
    .bind(target_id)
    .bind(full_name)
    .bind(role.map(Role::as_str))
    .fetch_optional(pool)
    .await?
    .ok_or(ProfileError::NotFound(target_id))?;

    Ok(ProfileRow { id: row.0, email: row.1, full_name: row.2, role: parse_role(&row.3) })
}

/// Delete a profile. Admin-only. Plots held by the member revert to
/// unassigned via the FK `ON DELETE SET NULL`, so their status is fixed up
/// here as well.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, `NotFound` for a missing row.
pub async fn delete_profile(pool: &PgPool, caller: &ProfileRow, target_id: Uuid) -> Result<(), ProfileError> {
    if caller.role != Role::Admin {
        return Err(ProfileError::Forbidden);
    }

    sqlx::query(
        "UPDATE garden_plots
         SET status = CASE WHEN EXISTS (
                 SELECT 1 FROM plot_plants pp
                 WHERE pp.plot_id = garden_plots.id AND pp.status <> 'harvested'
             ) THEN 'planted' ELSE 'available' END,
             assigned_user_id = NULL,
             updated_at = now()
         WHERE assigned_user_id = $1",
    )
    .bind(target_id)
    .execute(pool)
    .await?;

    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(target_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ProfileError::NotFound(target_id));
    }
    tracing::info!(%target_id, "profile deleted");
    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
