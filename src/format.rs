//! Wire Format Reference
//!
//! This module documents the token wire format as implemented by this
//! library.
//!
//! # Overview
//!
//! tagson does not define a text format of its own. It rides on JSON (or any
//! pluggable tree-to-text engine) and rewrites individual scalar values as
//! they pass through: a value JSON cannot express natively is replaced by a
//! **token**, an ordinary quoted string, at exactly the position the value
//! occupied.
//!
//! # Token Grammar
//!
//! ```text
//! token      := "#" type-name ":" payload
//! type-name  := one or more characters excluding ":"
//! payload    := zero or more characters (may itself look like a token)
//! ```
//!
//! A string is a syntactic token iff all of the following hold:
//!
//! - its length is at least 3 bytes,
//! - its first character is `#`,
//! - a `:` appears after at least one type-name character.
//!
//! Any string failing the grammar is an ordinary value with no type. The
//! payload is everything after the *first* `:`, uninterpreted: it may
//! contain further colons or hashes.
//!
//! **Examples**:
//!
//! | Candidate | Type | Payload |
//! |-----------|------|---------|
//! | `#BigInt:12345` | `BigInt` | `12345` |
//! | `#bigint:` | `bigint` | (empty) |
//! | `#:` | - | not a token (too short) |
//! | `#::x` | - | not a token (empty type name) |
//! | `BigInt:12345` | - | not a token (no leading `#`) |
//! | `#BigInt.12345` | - | not a token (no `:`) |
//!
//! # Built-in Types
//!
//! | Name | Claims | Encoding |
//! |------|--------|----------|
//! | `bigint` | arbitrary-precision integers | `#bigint:<decimal>` |
//! | `String` | strings that parse as syntactic tokens | `#String:<original>` |
//!
//! # The Escaping Rule
//!
//! Without it, a genuine plain string that happens to start with `#<name>:`
//! would be misdecoded as a typed value. The `String` codec claims exactly
//! those strings and adds one more layer on encode; decode strips exactly
//! one layer and never interprets the remainder:
//!
//! ```text
//! value                      on the wire
//! "#BigInt:1234"         →   "#String:#BigInt:1234"
//! "#String:#BigInt:1234" →   "#String:#String:#BigInt:1234"
//! ```
//!
//! Encode followed by decode is therefore the identity on every string,
//! regardless of how many leading `#name:`-shaped segments it contains;
//! only the outermost layer is touched per round trip.
//!
//! # Decode Policy
//!
//! | Case | Behavior |
//! |------|----------|
//! | Candidate fails the grammar | plain string, no error |
//! | Type name not registered | plain string, no error (forward compatible) |
//! | Registered type, payload rejected | codec's error, propagated as-is |
//! | Base text malformed | base engine's error; this layer never sees it |
//!
//! # What This Layer Does Not Do
//!
//! - It does not parse or validate the base format; it observes and rewrites
//!   scalars via the base engine's extension seams.
//! - It does not handle circular references; that belongs to whichever
//!   engine the caller plugs in.
//! - It does not serialize the registry. The writer's and reader's
//!   registries meet only through the type names on the wire.

// This module contains only documentation; no implementation code
