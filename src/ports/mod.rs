/// Ports module defining the interfaces between the comparison core and
/// the outside world (files, range semantics, console, report output).
pub mod outbound;
