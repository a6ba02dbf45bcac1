//! Edge case tests for somc-par
