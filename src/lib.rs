//! Hotdesk
//!
//! Hotdesk is the booking availability and conflict-resolution engine for a
//! coworking-space backend: given an office, its closure calendar, its
//! sharing policy and a snapshot of existing bookings, it decides whether a
//! proposed reservation can be granted.
//!
//! The engine is a pure function of its inputs. It performs no I/O, holds no
//! shared state, and leaves persistence and snapshot consistency to the
//! caller.

pub mod booking;
pub mod clock;
pub mod ids;
pub mod inactivity;
pub mod interval;
pub mod office;
pub mod prelude;
pub mod privacy;
pub mod rates;
