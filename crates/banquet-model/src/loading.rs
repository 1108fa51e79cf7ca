// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Instance loader for seating problems.
//!
//! The text format is whitespace-delimited; `#` starts a comment that runs to
//! the end of the line. The header holds the table capacity and the number of
//! clients, followed by one record per client:
//!
//! ```text
//! <capacity> <num_clients>
//! <id> <num_friends> <friend ids...> <num_enemies> <enemy ids...>
//! ```
//!
//! Records may span or share lines freely. The result goes through
//! `HallBuilder::build`, so every loaded hall is validated.

use crate::{
    client::{Client, ClientId},
    venue::{Hall, HallBuilder, HallError},
};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// The error type for the loading process.
#[derive(Debug, Error)]
pub enum HallLoaderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected end of input while parsing instance")]
    UnexpectedEof,
    #[error("could not parse token '{token}' as {expected}")]
    Parse {
        token: String,
        expected: &'static str,
    },
    #[error("invalid hall: {0}")]
    Hall(#[from] HallError),
}

/// Reads `Hall` instances from text.
///
/// ```rust
/// use banquet_model::{loading::HallLoader, venue::Venue};
///
/// let hall = HallLoader::new()
///     .from_str("2 2\n1 1 2 0\n2 0 0")
///     .unwrap();
/// assert_eq!(hall.table_capacity(), 2);
/// assert_eq!(hall.clients().len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HallLoader;

impl HallLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads a hall from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Hall, HallLoaderError> {
        let mut sc = Scanner::new(rdr);

        let capacity: usize = sc.next()?;
        let num_clients: usize = sc.next()?;
        let mut builder = HallBuilder::new(capacity);

        for _ in 0..num_clients {
            let id = ClientId::new(sc.next()?);
            let friends = sc.next_list()?;
            let enemies = sc.next_list()?;
            builder.add_client_with(Client::with_relations(id, friends, enemies));
        }

        Ok(builder.build()?)
    }

    /// Loads a hall from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Hall, HallLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a hall from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Hall, HallLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a hall from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Hall, HallLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Line-buffered tokenizer that drops `#` comments.
struct Scanner<R> {
    rdr: R,
    line: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            tokens: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, HallLoaderError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }

            self.line.clear();
            if self.rdr.read_line(&mut self.line)? == 0 {
                return Err(HallLoaderError::UnexpectedEof);
            }

            let content = match self.line.split_once('#') {
                Some((before, _)) => before,
                None => self.line.as_str(),
            };
            self.tokens
                .extend(content.split_whitespace().map(str::to_owned));
        }
    }

    fn next<T: FromStr>(&mut self) -> Result<T, HallLoaderError> {
        let token = self.next_token()?;
        token.parse::<T>().map_err(|_| HallLoaderError::Parse {
            token,
            expected: std::any::type_name::<T>(),
        })
    }

    /// Reads a count followed by that many client ids.
    fn next_list(&mut self) -> Result<Vec<ClientId>, HallLoaderError> {
        let len: usize = self.next()?;
        let mut ids = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            ids.push(ClientId::new(self.next()?));
        }
        Ok(ids)
    }
}
