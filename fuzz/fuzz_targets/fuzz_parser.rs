#![no_main]
use std::io::Read;

use arbitrary::{Arbitrary, Unstructured};
use jsonsink::{DEFAULT_MAX_DEPTH, DomBuilder, Parser, ParserOptions, ReaderSource, SliceSource};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Input layout: depth flags, a 4-byte read-split seed, then the document.
const HEADER: usize = 5;

/// Whitespace placed between tokens. The Unicode spaces must be rejected.
const SPACES: &[&str] = &[" ", "\t", "\n", "\r", "\r\n", "\u{00A0}", "\u{2028}", "\u{FEFF}"];

/// A document shape; written out with random whitespace between tokens.
#[derive(Arbitrary, Debug)]
enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A string holding one `\uXXXX` escape, possibly a lone surrogate.
    Escape(u16),
    List(Vec<Node>),
    Members(Vec<(String, Node)>),
}

struct Writer<'r> {
    out: String,
    rng: &'r mut SmallRng,
}

impl Writer<'_> {
    fn space(&mut self) {
        // Mostly nothing, so token-level mutations stay meaningful.
        if self.rng.random_ratio(1, 3) {
            let pick = self.rng.random_range(0..SPACES.len());
            self.out.push_str(SPACES[pick]);
        }
    }

    fn string(&mut self, text: &str) {
        self.out.push('"');
        for c in text.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                c if u32::from(c) < 0x20 => self.out.push_str(&format!("\\u{:04x}", u32::from(c))),
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn node(&mut self, node: &Node) {
        self.space();
        match node {
            Node::Null => self.out.push_str("null"),
            Node::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Node::Int(n) => self.out.push_str(&n.to_string()),
            Node::Float(f) if f.is_finite() => self.out.push_str(&format!("{f:e}")),
            Node::Float(_) => self.out.push('0'),
            Node::Text(text) => self.string(text),
            Node::Escape(unit) => self.out.push_str(&format!("\"\\u{unit:04X}\"")),
            Node::List(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.node(item);
                }
                self.space();
                self.out.push(']');
            }
            Node::Members(members) => {
                self.out.push('{');
                for (i, (name, value)) in members.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.space();
                    self.string(name);
                    self.space();
                    self.out.push(':');
                    self.node(value);
                }
                self.space();
                self.out.push('}');
            }
        }
        self.space();
    }
}

/// Replaces the input with a freshly generated document one time in ten;
/// otherwise defers to libFuzzer's byte-level mutations.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size >= HEADER && seed % 10 != 0 {
        return fuzzer_mutate(data, size, max_size);
    }
    if max_size < HEADER {
        return size;
    }
    let mut rng = SmallRng::seed_from_u64(u64::from(seed));
    rng.fill(&mut data[..HEADER]);

    let entropy: Vec<u8> = (0..size.max(16)).map(|_| rng.random()).collect();
    let Ok(node) = Node::arbitrary(&mut Unstructured::new(&entropy)) else {
        return HEADER;
    };
    let mut writer = Writer { out: String::new(), rng: &mut rng };
    writer.node(&node);

    let len = writer.out.len().min(max_size - HEADER);
    data[HEADER..HEADER + len].copy_from_slice(&writer.out.as_bytes()[..len]);
    HEADER + len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Hands out `data` in pieces whose sizes derive from `seed`, cutting through
/// UTF-8 sequences.
struct Chunked<'a> {
    data: &'a [u8],
    seed: u64,
}

impl Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.data.is_empty() {
            return Ok(0);
        }
        self.seed = self.seed.rotate_left(7) ^ 0x9E37_79B9;
        let n = (self.seed as usize % 5 + 1).min(self.data.len()).min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn parse(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = u64::from(u32::from_le_bytes([data[1], data[2], data[3], data[4]]));
    let data = &data[HEADER..];

    let options = ParserOptions {
        max_depth: if flags & 1 != 0 { DEFAULT_MAX_DEPTH } else { usize::from(flags >> 1) },
    };

    let from_slice = Parser::with_options(SliceSource::new(data), DomBuilder::new(), options)
        .parse()
        .map(DomBuilder::into_value);
    let reader = Chunked { data, seed: split_seed };
    let from_reader = Parser::with_options(ReaderSource::with_capacity(reader, 4), DomBuilder::new(), options)
        .parse()
        .map(DomBuilder::into_value);

    match (&from_slice, &from_reader) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.as_syntax(), b.as_syntax()),
        _ => panic!("slice and reader disagree: {from_slice:?} vs {from_reader:?}"),
    }

    // serde_json nests at most 128 deep and rejects out-of-range numbers, so
    // it only ever accepts a subset of what parses here.
    if options.max_depth == DEFAULT_MAX_DEPTH && serde_json::from_slice::<serde_json::Value>(data).is_ok() {
        assert!(from_slice.is_ok(), "serde_json accepted input rejected with {from_slice:?}");
    }

    if let Ok(value) = from_slice {
        let text = value.to_string();
        assert_eq!(jsonsink::from_str(&text), Ok(value));
    }
}

fuzz_target!(|data: &[u8]| parse(data));
