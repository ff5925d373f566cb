//! Declarative admin-site registrations.
//!
//! # Responsibility
//! - Declare, as static data, which resources the host admin scaffolding
//!   manages, which fields it searches, and which columns it lists.
//!
//! # Invariants
//! - Registrations carry no behavior; the host admin mechanism consumes
//!   them as-is.
//! - Field names match storage column names exactly.

/// Admin-site registration for one managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminRegistration {
    /// Storage table the registration manages.
    pub resource: &'static str,
    /// Columns offered to the admin search box. Empty means no search box.
    pub search_fields: &'static [&'static str],
    /// Columns shown, in order, in the admin list view.
    pub list_columns: &'static [&'static str],
}

/// Document editing screens: searchable by title and details, listed with
/// title and last-modified timestamp.
pub const DOCUMENT_ADMIN: AdminRegistration = AdminRegistration {
    resource: "documents",
    search_fields: &["title", "details"],
    list_columns: &["title", "modified"],
};

/// Banner editing screens: listed with headline, window bounds and the
/// retired flag. No search box.
pub const BANNER_ADMIN: AdminRegistration = AdminRegistration {
    resource: "banners",
    search_fields: &[],
    list_columns: &["headline", "publish_from", "publish_until", "retired"],
};

/// Every registration the host admin scaffolding should mount.
pub const ADMIN_REGISTRY: &[AdminRegistration] = &[BANNER_ADMIN, DOCUMENT_ADMIN];

/// Looks up the registration for a resource (table) name.
pub fn registration_for(resource: &str) -> Option<&'static AdminRegistration> {
    ADMIN_REGISTRY
        .iter()
        .find(|registration| registration.resource == resource)
}

#[cfg(test)]
mod tests {
    use super::{registration_for, ADMIN_REGISTRY};

    #[test]
    fn documents_are_searchable_by_title_and_details() {
        let registration = registration_for("documents").expect("documents must be registered");
        assert_eq!(registration.search_fields, ["title", "details"]);
        assert_eq!(registration.list_columns, ["title", "modified"]);
    }

    #[test]
    fn banners_are_registered_without_a_search_box() {
        let registration = registration_for("banners").expect("banners must be registered");
        assert!(registration.search_fields.is_empty());
        assert_eq!(
            registration.list_columns,
            ["headline", "publish_from", "publish_until", "retired"]
        );
    }

    #[test]
    fn registry_rejects_unknown_resources() {
        assert!(registration_for("pages").is_none());
        assert_eq!(ADMIN_REGISTRY.len(), 2);
    }
}
