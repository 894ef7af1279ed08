//! Built-in permission names gating administrative actions.
//!
//! These are seeded at startup and granted to the ADMIN role. New
//! permissions can be created at runtime; this module only names the ones
//! the API itself checks.

/// List all known permissions.
pub const LIST_PERMISSIONS: &str = "LIST_PERMISSIONS";
/// Create a new permission.
pub const CREATE_NEW_PERMISSION: &str = "CREATE_NEW_PERMISSION";
/// Assign a permission to a role.
pub const ASSIGN_PERMISSION_TO_ROLE: &str = "ASSIGN_PERMISSION_TO_ROLE";
/// List all roles.
pub const LIST_ROLES: &str = "LIST_ROLES";
/// Create a new role.
pub const CREATE_NEW_ROLE: &str = "CREATE_NEW_ROLE";
/// Assign a role to a user.
pub const ASSIGN_ROLE_TO_USER: &str = "ASSIGN_ROLE_TO_USER";
/// Import users in bulk from an email list.
pub const BULK_CREATE_USERS: &str = "BULK_CREATE_USERS";
/// Grant or revoke an access pass between two users.
pub const GRANT_ACCESS_PASS: &str = "GRANT_ACCESS_PASS";
/// Attach results to an existing test.
pub const ADD_RESULTS_PER_TEST_TYPE: &str = "ADD_RESULTS_PER_TEST_TYPE";

/// All built-in permission names, used by the seed routine.
pub const BUILT_IN: &[&str] = &[
    LIST_PERMISSIONS,
    CREATE_NEW_PERMISSION,
    ASSIGN_PERMISSION_TO_ROLE,
    LIST_ROLES,
    CREATE_NEW_ROLE,
    ASSIGN_ROLE_TO_USER,
    BULK_CREATE_USERS,
    GRANT_ACCESS_PASS,
    ADD_RESULTS_PER_TEST_TYPE,
];
