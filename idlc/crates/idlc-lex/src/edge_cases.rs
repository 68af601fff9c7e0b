//! Edge case tests for idlc-lex
