//! Errors from the editor's command interface.

use thiserror::Error;

/// Failures surfaced by the topology editor's command interface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
	/// A UI value that names none of the device types.
	#[error("unknown device type '{0}'")]
	UnknownDeviceType(String),
	/// A gesture named a device the registry does not hold.
	#[error("no device with id '{0}'")]
	UnknownDevice(String),
}
