use crate::configuration::Configuration;

const HEAD: &str = "    CHO";
const LINK: &str = "     |";
const ARM_LEFT: &str = "HO - C - H";
const ARM_RIGHT: &str = " H - C - OH";
const FOOT: &str = "    CH2OH";

/// Render a configuration as a textual Fischer projection
///
/// One aldehyde head line, then per center a backbone connector and a
/// stereocenter line with the hydroxyl arm on the side selected by that
/// center's state, then the terminal alcohol arm. The rendering starts and
/// ends with a newline so projections read as separate paragraphs when
/// printed between isomer lines.
///
/// ```
/// # use aldose::configuration::Configuration;
/// # use aldose::fischer::projection;
/// let diagram = projection(&Configuration {bits: vec![1, 0]});
/// assert_eq!(diagram, "\n    CHO\n     |\n H - C - OH\n     |\nHO - C - H\n    CH2OH\n");
/// ```
pub fn projection(configuration: &Configuration) -> String {
    let mut out = String::from("\n");
    out.push_str(HEAD);
    out.push('\n');

    for &bit in &configuration.bits {
        out.push_str(LINK);
        out.push('\n');
        out.push_str(if bit == 0 { ARM_LEFT } else { ARM_RIGHT });
        out.push('\n');
    }

    out.push_str(FOOT);
    out.push('\n');
    out
}
