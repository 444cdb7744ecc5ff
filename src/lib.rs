//! Tripsplit - Seat Booking and Cost Splitting for Shared Vehicle Trips
//!
//! This crate implements the reservation and pro-rata cost-splitting engine
//! for a group sharing a rented vehicle across calendar days split into
//! Morning and Afternoon slots.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
