//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose roster and grocery controllers to Dart via FRB sync calls.
//! - Hold one process-wide session per app behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation runs under the session lock, so mutations never interleave.
//! - Failures come back as `ok=false` with a human-readable message.

use log::warn;
use pocketlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, GroceryItem, GroceryItemId, GroceryService, InMemoryCatalogRepository,
    InMemoryStudentRepository, PendingRemoval, RemovalDecision, RemovalOutcome, RollNumber,
    SaveOutcome, Student, StudentService, EMPTY_CART_NOTICE, EMPTY_ROSTER_NOTICE,
};
use std::sync::{Mutex, OnceLock};

type StudentSession = StudentService<InMemoryStudentRepository>;
type GrocerySession = GroceryService<InMemoryCatalogRepository>;

static CORE_CONFIG: OnceLock<CoreConfig> = OnceLock::new();
static STUDENT_SESSION: OnceLock<Mutex<StudentSession>> = OnceLock::new();
static GROCERY_SESSION: OnceLock<Mutex<GrocerySession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   falls back to `POCKETLIST_LOG_LEVEL`, then to the build default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = effective_log_level(level.as_str(), resolve_config());
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Text for the delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePromptResponse {
    pub roll_number: u32,
    pub title: String,
    pub message: String,
    /// Button labels; the first one is the default and cancels.
    pub options: Vec<String>,
}

/// One roster row as rendered by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentItem {
    pub roll_number: u32,
    /// Zero-padded roll number (`"07"`).
    pub roll_label: String,
    pub name: String,
    /// Full list line including 1-based position in the filtered view.
    pub line: String,
}

/// Roster view envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentListResponse {
    /// Filtered rows in roster order.
    pub items: Vec<StudentItem>,
    pub search_text: String,
    pub input_text: String,
    /// Roll number currently in edit, if any.
    pub edit_target: Option<u32>,
    /// Empty-list notice, or a row count.
    pub message: String,
}

/// Result envelope for roster mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentActionResponse {
    pub ok: bool,
    pub roll_number: Option<u32>,
    pub name: Option<String>,
    pub message: String,
}

impl StudentActionResponse {
    fn success(message: impl Into<String>, student: &Student) -> Self {
        Self {
            ok: true,
            roll_number: Some(student.roll_number.get()),
            name: Some(student.name.clone()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            roll_number: None,
            name: None,
            message: message.into(),
        }
    }
}

/// One catalog or cart entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItemView {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Catalog view envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    pub items: Vec<GroceryItemView>,
    pub search_text: String,
}

/// Cart envelope returned by every cart call.
#[derive(Debug, Clone, PartialEq)]
pub struct CartResponse {
    pub ok: bool,
    pub items: Vec<GroceryItemView>,
    pub total: f64,
    /// Active removal policy (`remove_all_matching|remove_one_matching`).
    pub removal_policy: String,
    pub message: String,
}

/// Returns the current filtered roster.
#[flutter_rust_bridge::frb(sync)]
pub fn student_list() -> StudentListResponse {
    with_student_session(|session| student_list_response(session))
        .unwrap_or_else(student_list_failure)
}

/// Replaces the roster search text and returns the new view.
#[flutter_rust_bridge::frb(sync)]
pub fn student_set_search(text: String) -> StudentListResponse {
    with_student_session(|session| {
        session.set_search_text(text);
        student_list_response(session)
    })
    .unwrap_or_else(student_list_failure)
}

/// Saves the input field: updates the record in edit, else adds a new one.
///
/// A blank input returns `ok=false` and keeps the input and edit target.
#[flutter_rust_bridge::frb(sync)]
pub fn student_save(input: String) -> StudentActionResponse {
    let result = with_student_session(|session| {
        session.set_input_text(input);
        session.save()
    });
    match result {
        Ok(Ok(SaveOutcome::Added(student))) => {
            StudentActionResponse::success("Student added.", &student)
        }
        Ok(Ok(SaveOutcome::Updated(student))) => {
            StudentActionResponse::success("Student updated.", &student)
        }
        Ok(Err(err)) => StudentActionResponse::failure(err.to_string()),
        Err(err) => StudentActionResponse::failure(err),
    }
}

/// Puts one record in edit; `name` carries the pre-filled input text.
#[flutter_rust_bridge::frb(sync)]
pub fn student_begin_edit(roll_number: u32) -> StudentActionResponse {
    let Some(roll_number) = RollNumber::new(roll_number) else {
        return StudentActionResponse::failure("roll number must be positive");
    };
    let result = with_student_session(|session| session.begin_edit(roll_number).cloned());
    match result {
        Ok(Ok(student)) => StudentActionResponse::success("Editing student.", &student),
        Ok(Err(err)) => StudentActionResponse::failure(err.to_string()),
        Err(err) => StudentActionResponse::failure(err),
    }
}

/// Leaves edit mode and clears the input field.
#[flutter_rust_bridge::frb(sync)]
pub fn student_cancel_edit() -> StudentListResponse {
    with_student_session(|session| {
        session.cancel_edit();
        student_list_response(session)
    })
    .unwrap_or_else(student_list_failure)
}

/// Builds the confirmation dialog shown before `student_delete`.
///
/// The roll number is bound here; the dialog answer is passed back as
/// `confirmed`.
#[flutter_rust_bridge::frb(sync)]
pub fn student_delete_prompt(roll_number: u32) -> DeletePromptResponse {
    DeletePromptResponse {
        roll_number,
        title: PendingRemoval::TITLE.to_string(),
        message: PendingRemoval::MESSAGE.to_string(),
        options: vec![
            PendingRemoval::CANCEL_LABEL.to_string(),
            PendingRemoval::DELETE_LABEL.to_string(),
        ],
    }
}

/// Applies the answer to the delete prompt for `roll_number`.
///
/// `confirmed=false` is the Cancel path and never touches the roster.
/// Deleting a missing record succeeds as a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn student_delete(roll_number: u32, confirmed: bool) -> StudentActionResponse {
    let Some(roll_number) = RollNumber::new(roll_number) else {
        return StudentActionResponse::failure("roll number must be positive");
    };
    let decision = if confirmed {
        RemovalDecision::Delete
    } else {
        RemovalDecision::Cancel
    };
    let result = with_student_session(|session| {
        let pending = session.request_remove(roll_number);
        session.resolve_remove(pending, decision)
    });
    match result {
        Ok(RemovalOutcome::Removed(student)) => {
            StudentActionResponse::success("Student deleted.", &student)
        }
        Ok(RemovalOutcome::AlreadyAbsent) => StudentActionResponse {
            ok: true,
            roll_number: Some(roll_number.get()),
            name: None,
            message: "Nothing to delete.".to_string(),
        },
        Ok(RemovalOutcome::Cancelled) => StudentActionResponse {
            ok: true,
            roll_number: Some(roll_number.get()),
            name: None,
            message: "Delete cancelled.".to_string(),
        },
        Err(err) => StudentActionResponse::failure(err),
    }
}

/// Returns the catalog filtered by the current grocery search text.
#[flutter_rust_bridge::frb(sync)]
pub fn grocery_catalog() -> CatalogResponse {
    with_grocery_session(|session| catalog_response(session)).unwrap_or_else(|err| {
        warn!("event=ffi_catalog module=ffi status=error error={err}");
        CatalogResponse {
            items: Vec::new(),
            search_text: String::new(),
        }
    })
}

/// Replaces the grocery search text and returns the filtered catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn grocery_set_search(text: String) -> CatalogResponse {
    with_grocery_session(|session| {
        session.set_search_text(text);
        catalog_response(session)
    })
    .unwrap_or_else(|err| {
        warn!("event=ffi_catalog module=ffi status=error error={err}");
        CatalogResponse {
            items: Vec::new(),
            search_text: String::new(),
        }
    })
}

/// Returns the current cart and total.
#[flutter_rust_bridge::frb(sync)]
pub fn cart_snapshot() -> CartResponse {
    cart_call(|session| Ok(cart_message(session)))
}

/// Adds one unit of catalog item `id` to the cart.
#[flutter_rust_bridge::frb(sync)]
pub fn cart_add(id: String) -> CartResponse {
    cart_call(|session| {
        let id = GroceryItemId::new(id.as_str()).map_err(|err| err.to_string())?;
        let item = session.add_to_cart(&id).map_err(|err| err.to_string())?;
        Ok(format!("{} added.", item.name))
    })
}

/// Removes cart entries for `id` under the configured removal policy.
#[flutter_rust_bridge::frb(sync)]
pub fn cart_remove(id: String) -> CartResponse {
    cart_call(|session| {
        let id = GroceryItemId::new(id.as_str()).map_err(|err| err.to_string())?;
        let removed = session.remove_from_cart(&id);
        Ok(format!("Removed {removed} item(s)."))
    })
}

/// Empties the cart.
#[flutter_rust_bridge::frb(sync)]
pub fn cart_clear() -> CartResponse {
    cart_call(|session| {
        session.clear_cart();
        Ok(EMPTY_CART_NOTICE.to_string())
    })
}

fn effective_log_level<'a>(requested: &'a str, config: &CoreConfig) -> &'a str {
    if requested.trim().is_empty() {
        config.log_level
    } else {
        requested
    }
}

fn resolve_config() -> &'static CoreConfig {
    CORE_CONFIG.get_or_init(|| {
        CoreConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_load module=ffi status=error error={err}");
            CoreConfig::default()
        })
    })
}

fn with_student_session<T>(f: impl FnOnce(&mut StudentSession) -> T) -> Result<T, String> {
    let session = STUDENT_SESSION.get_or_init(|| {
        let session = if resolve_config().seed_demo_data {
            StudentService::with_demo_roster()
        } else {
            StudentService::new(InMemoryStudentRepository::new())
        };
        Mutex::new(session)
    });
    let mut guard = session
        .lock()
        .map_err(|_| "student session unavailable".to_string())?;
    Ok(f(&mut guard))
}

fn with_grocery_session<T>(f: impl FnOnce(&mut GrocerySession) -> T) -> Result<T, String> {
    let session = GROCERY_SESSION.get_or_init(|| {
        Mutex::new(GroceryService::with_demo_catalog(
            resolve_config().cart_removal_policy,
        ))
    });
    let mut guard = session
        .lock()
        .map_err(|_| "grocery session unavailable".to_string())?;
    Ok(f(&mut guard))
}

fn student_list_response(session: &StudentSession) -> StudentListResponse {
    let items = session
        .filtered()
        .into_iter()
        .enumerate()
        .map(|(index, student)| StudentItem {
            roll_number: student.roll_number.get(),
            roll_label: student.roll_number.padded(),
            name: student.name.clone(),
            line: student.display_line(index + 1),
        })
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        EMPTY_ROSTER_NOTICE.to_string()
    } else {
        format!("{} student(s).", items.len())
    };
    StudentListResponse {
        items,
        search_text: session.search_text().to_string(),
        input_text: session.input_text().to_string(),
        edit_target: session.edit_target().map(RollNumber::get),
        message,
    }
}

fn student_list_failure(message: String) -> StudentListResponse {
    StudentListResponse {
        items: Vec::new(),
        search_text: String::new(),
        input_text: String::new(),
        edit_target: None,
        message,
    }
}

fn catalog_response(session: &GrocerySession) -> CatalogResponse {
    CatalogResponse {
        items: session
            .filtered_catalog()
            .into_iter()
            .map(to_item_view)
            .collect(),
        search_text: session.search_text().to_string(),
    }
}

fn cart_call(f: impl FnOnce(&mut GrocerySession) -> Result<String, String>) -> CartResponse {
    let result = with_grocery_session(|session| {
        let outcome = f(session);
        let items = session
            .cart()
            .entries()
            .iter()
            .map(|item| to_item_view(item))
            .collect::<Vec<_>>();
        (outcome, items, session.total(), session.removal_policy())
    });
    match result {
        Ok((outcome, items, total, policy)) => {
            let (ok, message) = match outcome {
                Ok(message) => (true, message),
                Err(message) => (false, message),
            };
            CartResponse {
                ok,
                items,
                total,
                removal_policy: policy.to_string(),
                message,
            }
        }
        Err(message) => CartResponse {
            ok: false,
            items: Vec::new(),
            total: 0.0,
            removal_policy: String::new(),
            message,
        },
    }
}

fn cart_message(session: &GrocerySession) -> String {
    if session.cart().is_empty() {
        EMPTY_CART_NOTICE.to_string()
    } else {
        format!("{} item(s) in cart.", session.cart().len())
    }
}

fn to_item_view(item: &GroceryItem) -> GroceryItemView {
    GroceryItemView {
        id: item.id.to_string(),
        name: item.name.clone(),
        price: item.price,
    }
}
