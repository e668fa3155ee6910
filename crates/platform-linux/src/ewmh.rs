//! EWMH fullscreen provider for X11 window managers.
//!
//! X11 has no "fullscreen space" object. The closest equivalent is the
//! active window carrying `_NET_WM_STATE_FULLSCREEN`, with
//! `_NET_CURRENT_DESKTOP` naming the virtual desktop it sits on.

use spaceprobe_common::error::{ProbeError, ProbeResult};
use spaceprobe_platform_core::{DesktopStateProvider, DisplayServer, SpaceKind, SpaceSnapshot};
use x11rb::connection::Connection;
use x11rb::errors::ConnectError;
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt, Window};
use x11rb::rust_connection::RustConnection;

use crate::display::{detect_display_server, has_x11_display};

/// Reads the active window state through EWMH root properties.
///
/// Opens a connection per read and keeps no handle between reads.
#[derive(Debug, Clone, Default)]
pub struct EwmhProvider {
    /// X display name; `None` uses `DISPLAY`.
    display: Option<String>,
}

impl EwmhProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(display: impl Into<String>) -> Self {
        Self {
            display: Some(display.into()),
        }
    }

    fn read(&self) -> ProbeResult<SpaceSnapshot> {
        let (conn, screen_num) =
            x11rb::connect(self.display.as_deref()).map_err(connect_error)?;
        let root = conn.setup().roots[screen_num].root;

        let active_atom = intern(&conn, "_NET_ACTIVE_WINDOW")?;
        let desktop_atom = intern(&conn, "_NET_CURRENT_DESKTOP")?;
        let state_atom = intern(&conn, "_NET_WM_STATE")?;
        let fullscreen_atom = intern(&conn, "_NET_WM_STATE_FULLSCREEN")?;

        let desktop = first_u32(&conn, root, desktop_atom, AtomEnum::CARDINAL.into())?;
        let active = first_u32(&conn, root, active_atom, AtomEnum::WINDOW.into())?
            .filter(|&w| w != x11rb::NONE);

        let kind = match active {
            Some(window) => {
                let states = u32_values(&conn, window, state_atom, AtomEnum::ATOM.into())?;
                kind_from_wm_state(&states, fullscreen_atom)
            }
            None => SpaceKind::Desktop,
        };

        Ok(SpaceSnapshot::new(
            desktop.map(u64::from),
            kind,
            DisplayServer::X11,
        ))
    }
}

/// Fullscreen iff the window's `_NET_WM_STATE` lists the fullscreen atom.
pub fn kind_from_wm_state(states: &[Atom], fullscreen_atom: Atom) -> SpaceKind {
    if states.contains(&fullscreen_atom) {
        SpaceKind::Fullscreen
    } else {
        SpaceKind::Desktop
    }
}

/// The server refusing the handshake (missing xauth cookie, foreign user)
/// is a permission problem; anything else is a platform failure.
pub fn connect_error(e: ConnectError) -> ProbeError {
    match e {
        ConnectError::SetupAuthenticate(_) | ConnectError::SetupFailed(_) => {
            ProbeError::permission_denied(format!("X server refused the connection: {e}"))
        }
        other => ProbeError::platform(format!("cannot connect to X server: {other}")),
    }
}

fn intern(conn: &RustConnection, name: &str) -> ProbeResult<Atom> {
    let reply = conn
        .intern_atom(false, name.as_bytes())
        .map_err(|e| ProbeError::platform(format!("intern {name}: {e}")))?
        .reply()
        .map_err(|e| ProbeError::platform(format!("intern {name}: {e}")))?;
    Ok(reply.atom)
}

fn u32_values(
    conn: &RustConnection,
    window: Window,
    property: Atom,
    kind: Atom,
) -> ProbeResult<Vec<u32>> {
    let reply = conn
        .get_property(false, window, property, kind, 0, 1024)
        .map_err(|e| ProbeError::platform(format!("get_property: {e}")))?
        .reply()
        .map_err(|e| ProbeError::platform(format!("get_property: {e}")))?;
    Ok(reply
        .value32()
        .map(|values| values.collect())
        .unwrap_or_default())
}

fn first_u32(
    conn: &RustConnection,
    window: Window,
    property: Atom,
    kind: Atom,
) -> ProbeResult<Option<u32>> {
    Ok(u32_values(conn, window, property, kind)?.into_iter().next())
}

impl DesktopStateProvider for EwmhProvider {
    fn name(&self) -> &'static str {
        "linux-ewmh"
    }

    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        if self.display.is_none() && !has_x11_display() {
            return Err(match detect_display_server() {
                DisplayServer::Wayland => ProbeError::unsupported(
                    "Wayland has no portable fullscreen query and no X display is available",
                ),
                _ => ProbeError::unsupported("no graphical session (DISPLAY is not set)"),
            });
        }
        let snapshot = self.read()?;
        tracing::debug!(
            desktop = ?snapshot.space_id,
            kind = ?snapshot.kind,
            "EWMH active window state"
        );
        Ok(snapshot)
    }
}
