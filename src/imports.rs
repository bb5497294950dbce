//! Ordered import insertion.
//!
//! Plans where new `import` lines belong inside a source file's import block,
//! keeping the block lexicographically sorted and skipping imports that are
//! already present. Planning is pure: each import is positioned against the
//! *original* line list, and the resulting patches carry offsets into the
//! original text. Whoever applies the patches must account for the offset
//! shift of earlier insertions (the document layer applies them back to
//! front).

/// Token that starts an import line.
const IMPORT_PREFIX: &str = "import ";

/// A single text insertion at an absolute character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPatch {
    pub offset: usize,
    pub text: String,
}

/// Plan insertions for `imports` into the file given as `lines`.
///
/// For each import: exact matches are skipped; otherwise the import is placed
/// before the first import line that sorts after it, or at the end of the
/// import block. A file with no import block at all yields no patch for that
/// import; the caller is expected to warn (see the orchestrator).
pub fn plan_imports(
    lines: &[&str],
    imports: &[String],
    line_terminator: &str,
) -> Vec<ImportPatch> {
    let terminator_width = line_terminator.chars().count();
    let mut patches = Vec::new();

    for import in imports {
        let mut offset = 0usize;
        let mut imports_reached = false;

        for &line in lines {
            if line.starts_with(IMPORT_PREFIX) {
                imports_reached = true;
                match line.cmp(import.as_str()) {
                    std::cmp::Ordering::Equal => break,
                    std::cmp::Ordering::Greater => {
                        patches.push(ImportPatch {
                            offset,
                            text: format!("{import}{line_terminator}"),
                        });
                        break;
                    }
                    std::cmp::Ordering::Less => {}
                }
            } else if imports_reached {
                patches.push(ImportPatch {
                    offset,
                    text: format!("{import}{line_terminator}"),
                });
                break;
            }

            offset += line.chars().count() + terminator_width;
        }
    }

    patches
}
