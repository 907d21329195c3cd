pub mod m20260209_000001_create_attendance;
