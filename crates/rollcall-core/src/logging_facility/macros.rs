//! Operation boundary macros
//!
//! Every directory operation emits exactly one start event and exactly one
//! end or end_error event, tagged with the canonical fields from
//! `rollcall_core_types::schema`.

/// Log the start of an operation
///
/// ```
/// # use rollcall_core::log_op_start;
/// log_op_start!("add_membership");
/// log_op_start!("add_membership", guest_id = 1_i64, event_id = 2_i64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use rollcall_core::log_op_end;
/// log_op_end!("top_guests", duration_ms = 3_u64);
/// log_op_end!("top_guests", duration_ms = 3_u64, result_len = 1_u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// ```
/// # use rollcall_core::log_op_error;
/// # use rollcall_core::errors::DirectoryError;
/// # use rollcall_core::model::GuestId;
/// let err = DirectoryError::GuestNotFound { guest_id: GuestId(1) };
/// log_op_error!("add_membership", err, duration_ms = 1_u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            "{}",
            ex_err
        );
    }};
}
