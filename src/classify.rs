use crate::set::SetKind;
use crate::stats::NameReport;

/// Classifies domain-name lines by their separator count and accumulates
/// the unique members of each category.
///
/// Per line, counting '.' occurrences:
/// - 0 dots: top-level domain.
/// - 1 dot with a leading dot (".com"): top-level domain.
/// - 1 dot otherwise: second-level domain, also recorded as a unique host
///   and counted as an FQDN.
/// - 2 dots: FQDN only.
/// - 3 or more dots: dropped entirely, from every set and from the count.
///   The legacy tool never classified these; kept for compatibility.
///
/// Lines are taken verbatim: no trimming, no case folding, and a blank
/// line counts zero dots and so lands in the top-level set. The FQDN total
/// counts every qualifying line, repeats included; only the sets
/// deduplicate. `kind` picks the set ordering and never changes which
/// lines land where.
pub fn classify<I>(lines: I, kind: SetKind) -> NameReport
where
    I: IntoIterator<Item = String>,
{
    let mut report = NameReport::new(kind);

    for line in lines {
        let dots = line.matches('.').count();
        match dots {
            0 => {
                report.unique_top_level.insert(line);
            }
            1 => {
                if line.starts_with('.') {
                    report.unique_top_level.insert(line);
                } else {
                    report.unique_second_level.insert(line.clone());
                    report.unique_hosts.insert(line);
                    report.total_fqdns += 1;
                }
            }
            2 => {
                report.unique_hosts.insert(line);
                report.total_fqdns += 1;
            }
            _ => {}
        }
    }

    report
}
