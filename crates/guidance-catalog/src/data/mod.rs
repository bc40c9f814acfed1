//! Hard-coded instrument content

pub(crate) mod eq;
pub(crate) mod goal;
pub(crate) mod intelligence;
pub(crate) mod readiness;
pub(crate) mod riasec;

/// Lay per-category item lists out round-robin: item `k` of category `c`
/// lands at position `k * categories + c`.
fn interleave(groups: &[&'static [&'static str]]) -> Vec<&'static str> {
    let rounds = groups.iter().map(|g| g.len()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(groups.iter().map(|g| g.len()).sum());
    for round in 0..rounds {
        for group in groups {
            if let Some(item) = group.get(round) {
                out.push(*item);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::interleave;

    #[test]
    fn interleave_is_round_robin() {
        let out = interleave(&[&["r1", "r2"], &["i1", "i2"], &["a1", "a2"]]);
        assert_eq!(out, vec!["r1", "i1", "a1", "r2", "i2", "a2"]);
    }
}
