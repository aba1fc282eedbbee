//! Tests for language negotiation
