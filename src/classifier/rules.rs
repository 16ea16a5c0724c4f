//! Profile matching stage
//!
//! A profile qualifies when the input has at least `MIN_SYMPTOMS` tokens
//! and shares at least `MIN_OVERLAP` of them with the profile. The first
//! qualifying profile in table order wins, even if a later profile
//! overlaps more. That tie-break looks accidental but existing results
//! depend on it, so it is kept.

use log::debug;

use crate::knowledge::{KnownProfile, KNOWN_PROFILES};
use crate::types::SymptomSet;

/// Minimum number of reported symptoms before profiles are consulted
pub const MIN_SYMPTOMS: usize = 3;

/// Minimum shared tokens for a profile to qualify
pub const MIN_OVERLAP: usize = 2;

/// A qualifying profile and where it sits in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileMatch {
    pub index: usize,
    pub overlap: usize,
    pub profile: &'static KnownProfile,
}

/// Ordered rule list over a profile table
#[derive(Debug, Clone, Copy)]
pub struct ProfileMatcher {
    profiles: &'static [KnownProfile],
}

impl Default for ProfileMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileMatcher {
    /// Matcher over the built-in profile table
    pub fn new() -> Self {
        Self { profiles: KNOWN_PROFILES }
    }

    /// Matcher over a custom table
    pub fn with_profiles(profiles: &'static [KnownProfile]) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &'static [KnownProfile] {
        self.profiles
    }

    /// First profile that qualifies for `symptoms`, if any
    pub fn find(&self, symptoms: &SymptomSet) -> Option<ProfileMatch> {
        if symptoms.len() < MIN_SYMPTOMS {
            return None;
        }

        self.profiles.iter().enumerate().find_map(|(index, profile)| {
            let overlap = symptoms.overlap(profile.symptoms);
            if overlap >= MIN_OVERLAP {
                debug!(
                    "profile #{} ({}) qualified with overlap {}",
                    index, profile.label, overlap
                );
                Some(ProfileMatch { index, overlap, profile })
            } else {
                None
            }
        })
    }
}
