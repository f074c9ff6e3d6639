// Verb prefix agreement table

use yajwiz_core::analysis::{Number, Person};

use Number::{Plur, Sing};
use Person::{First, Second, Third, Zero};

/// Whether the subject of the verb is expressed by the prefix (`P`) or the
/// verb carries `-lu'` and the prefix marks the object (`NP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Subject,
    NonSubject,
}

impl Voice {
    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Subject => "P",
            Voice::NonSubject => "NP",
        }
    }
}

/// Subject and object agreement expressed by one prefix in one voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agreement {
    /// Prefix with its trailing dash; `-` stands for no prefix.
    pub prefix: &'static str,
    pub voice: Voice,
    pub imperative: bool,
    pub subject: &'static [Person],
    pub subject_number: Option<Number>,
    pub object: &'static [Person],
    pub object_number: Option<Number>,
}

const fn row(
    prefix: &'static str,
    voice: Voice,
    imperative: bool,
    subject: &'static [Person],
    subject_number: Option<Number>,
    object: &'static [Person],
    object_number: Option<Number>,
) -> Agreement {
    Agreement { prefix, voice, imperative, subject, subject_number, object, object_number }
}

use Voice::{NonSubject, Subject};

pub const AGREEMENT: &[Agreement] = &[
    row("HI-", Subject, true, &[Second], None, &[First], Some(Sing)),
    row("gho-", Subject, true, &[Second], None, &[First], Some(Plur)),
    row("yI-", Subject, true, &[Second], None, &[Third, Zero], Some(Sing)),
    row("tI-", Subject, true, &[Second], None, &[Third], Some(Plur)),
    row("pe-", Subject, true, &[Second], Some(Plur), &[Zero], None),
    row("qa-", Subject, false, &[First], Some(Sing), &[Second], Some(Sing)),
    row("Sa-", Subject, false, &[First], Some(Sing), &[Second], Some(Plur)),
    row("vI-", Subject, false, &[First], Some(Sing), &[Third], None),
    row("jI-", Subject, false, &[First], Some(Sing), &[Zero], None),
    row("pI-", Subject, false, &[First], Some(Plur), &[Second], Some(Sing)),
    row("re-", Subject, false, &[First], Some(Plur), &[Second], Some(Plur)),
    row("wI-", Subject, false, &[First], Some(Plur), &[Third], Some(Sing)),
    row("DI-", Subject, false, &[First], Some(Plur), &[Third], Some(Plur)),
    row("ma-", Subject, false, &[First], Some(Plur), &[Zero], None),
    row("cho-", Subject, false, &[Second], Some(Sing), &[First], Some(Sing)),
    row("ju-", Subject, false, &[Second], Some(Sing), &[First], Some(Plur)),
    row("Da-", Subject, false, &[Second], Some(Sing), &[Third], None),
    row("bI-", Subject, false, &[Second], Some(Sing), &[Zero], None),
    row("tu-", Subject, false, &[Second], Some(Plur), &[First], Some(Sing)),
    row("che-", Subject, false, &[Second], Some(Plur), &[First], Some(Plur)),
    row("bo-", Subject, false, &[Second], Some(Plur), &[Third], None),
    row("Su-", Subject, false, &[Second], Some(Plur), &[Zero], None),
    row("mu-", Subject, false, &[Third], None, &[First], Some(Sing)),
    row("nu-", Subject, false, &[Third], None, &[First], Some(Plur)),
    row("Du-", Subject, false, &[Third], Some(Sing), &[Second], Some(Sing)),
    row("nI-", Subject, false, &[Third], Some(Plur), &[Second], Some(Sing)),
    row("lI-", Subject, false, &[Third], None, &[Second], Some(Plur)),
    row("lu-", Subject, false, &[Third], Some(Plur), &[Third], Some(Sing)),
    row("-", Subject, false, &[Third], None, &[Third, Zero], None),
    row("vI-", NonSubject, false, &[Zero], None, &[First], Some(Sing)),
    row("wI-", NonSubject, false, &[Zero], None, &[First], Some(Plur)),
    row("Da-", NonSubject, false, &[Zero], None, &[Second], Some(Sing)),
    row("bo-", NonSubject, false, &[Zero], None, &[Second], Some(Plur)),
    row("-", NonSubject, false, &[Zero], None, &[Third, Zero], Some(Sing)),
    row("lu-", NonSubject, false, &[Zero], None, &[Third], Some(Plur)),
];

/// Find the agreement row of a prefix (`-` for none) in a voice.
pub fn lookup(prefix: &str, voice: Voice) -> Option<&'static Agreement> {
    AGREEMENT.iter().find(|a| a.prefix == prefix && a.voice == voice)
}

fn join_persons(persons: &[Person]) -> String {
    persons
        .iter()
        .map(|p| p.as_digit().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Agreement {
    /// Universal Dependencies features, e.g.
    /// `Person=1|Number=Sing|ObjPerson=3`.
    pub fn features(&self) -> String {
        let mut feats = Vec::new();
        if self.imperative {
            feats.push("Mood=Imp".to_string());
        }
        feats.push(format!("Person={}", join_persons(self.subject)));
        if let Some(n) = self.subject_number {
            feats.push(format!("Number={n}"));
        }
        feats.push(format!("ObjPerson={}", join_persons(self.object)));
        if let Some(n) = self.object_number {
            feats.push(format!("ObjNumber={n}"));
        }
        feats.join("|")
    }
}
