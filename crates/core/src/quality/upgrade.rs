//! Upgrade policy - the single point of truth for quality comparisons.

use tracing::{debug, trace};

use super::types::{Quality, QualityTier};

/// Decide whether `candidate` should replace an item already held at
/// `current`, under a profile with the given `cutoff`.
///
/// Rules, first match wins:
/// 1. `current` already meets the cutoff: no upgrade wanted.
/// 2. `candidate` is a strictly higher tier: upgrade.
/// 3. `current` is a strictly higher tier: keep what we have.
/// 4. Equal tiers: only a proper replacing a non-proper is an upgrade.
pub fn is_upgrade(current: Quality, candidate: Quality, cutoff: QualityTier) -> bool {
    if current.tier >= cutoff {
        trace!("existing item meets cut-off, skipping");
        return false;
    }

    if candidate.tier > current.tier {
        debug!("{} upgrades existing {}", candidate, current);
        return true;
    }

    if current.tier > candidate.tier {
        trace!("existing item has better quality, skipping");
        return false;
    }

    if candidate.proper && !current.proper {
        debug!("proper re-release upgrades existing {}", current);
        return true;
    }

    trace!("same quality and not a proper, skipping");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality(tier: QualityTier) -> Quality {
        Quality::new(tier, false)
    }

    fn proper(tier: QualityTier) -> Quality {
        Quality::new(tier, true)
    }

    #[test]
    fn test_higher_tier_is_upgrade() {
        assert!(is_upgrade(
            quality(QualityTier::Sdtv),
            quality(QualityTier::Bluray1080),
            QualityTier::Bluray1080,
        ));
        assert!(is_upgrade(
            quality(QualityTier::Hdtv),
            quality(QualityTier::WebDl),
            QualityTier::Bluray1080,
        ));
    }

    #[test]
    fn test_lower_tier_is_not_upgrade() {
        assert!(!is_upgrade(
            quality(QualityTier::Bluray720),
            quality(QualityTier::Hdtv),
            QualityTier::Bluray1080,
        ));
    }

    #[test]
    fn test_cutoff_dominates_even_over_higher_tier() {
        // Existing item is at the cutoff: nothing upgrades it.
        assert!(!is_upgrade(
            quality(QualityTier::Hdtv),
            quality(QualityTier::Bluray1080),
            QualityTier::Hdtv,
        ));
        // Existing item is above the cutoff.
        assert!(!is_upgrade(
            quality(QualityTier::WebDl),
            quality(QualityTier::Bluray1080),
            QualityTier::Hdtv,
        ));
    }

    #[test]
    fn test_proper_upgrades_same_tier() {
        assert!(is_upgrade(
            quality(QualityTier::Hdtv),
            proper(QualityTier::Hdtv),
            QualityTier::Bluray1080,
        ));
    }

    #[test]
    fn test_non_proper_does_not_replace_proper() {
        assert!(!is_upgrade(
            proper(QualityTier::Hdtv),
            quality(QualityTier::Hdtv),
            QualityTier::Bluray1080,
        ));
    }

    #[test]
    fn test_proper_does_not_replace_proper() {
        assert!(!is_upgrade(
            proper(QualityTier::Hdtv),
            proper(QualityTier::Hdtv),
            QualityTier::Bluray1080,
        ));
    }

    #[test]
    fn test_same_quality_not_proper_is_not_upgrade() {
        assert!(!is_upgrade(
            quality(QualityTier::Dvd),
            quality(QualityTier::Dvd),
            QualityTier::Bluray1080,
        ));
    }

    #[test]
    fn test_monotonic_across_tiers() {
        let a = quality(QualityTier::Dvd);
        let b = quality(QualityTier::WebDl);
        let c = quality(QualityTier::Bluray1080);

        // Cutoff below all three so only tier order decides.
        assert!(is_upgrade(a, c, QualityTier::Bluray1080));
        assert!(is_upgrade(a, b, QualityTier::Bluray1080));
        assert!(is_upgrade(b, c, QualityTier::Bluray1080));
        assert!(!is_upgrade(c, a, QualityTier::Bluray1080));
    }
}
