//! Raw SkyLight bindings. Read-only calls only.

#[link(name = "SkyLight", kind = "framework")]
extern "C" {
    fn SLSMainConnectionID() -> i32;
    fn CGSGetActiveSpace(cid: i32) -> u64;
    fn CGSSpaceGetType(cid: i32, sid: u64) -> i32;
}

/// Returns `(connection, active space id, space type)`; zeros on failure.
pub(crate) fn active_space() -> (i32, u64, i32) {
    // SAFETY: these calls take plain integers and only read window-server state.
    unsafe {
        let connection = SLSMainConnectionID();
        if connection == 0 {
            return (0, 0, 0);
        }
        let space_id = CGSGetActiveSpace(connection);
        if space_id == 0 {
            return (connection, 0, 0);
        }
        (connection, space_id, CGSSpaceGetType(connection, space_id))
    }
}
