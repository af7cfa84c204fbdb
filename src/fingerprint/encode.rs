use crate::graph::{Bond, BondOrder, Graph};

/// Encode a path of atom indices to its token string.
///
/// Atom patterns and bond symbols alternate, read left to right; no bond
/// symbol follows the last atom. Pseudo-atom labels encountered along the way
/// are appended to `pseudo_atoms` but do not alter the token — two distinct
/// pseudo-atom kinds currently encode identically. Disambiguating them would
/// need a canonical label registry; the raw labels are collected here so a
/// later pass could fold a registry index into the token.
///
/// A consecutive pair with no bond in the graph is a caller error and fails
/// loudly rather than guessing a bond symbol.
pub fn encode_path<G: Graph>(
    graph: &G,
    path: &[usize],
    pseudo_atoms: &mut Vec<String>,
) -> eyre::Result<String> {
    let mut token = String::with_capacity(path.len() * 3);

    for (i, &index) in path.iter().enumerate() {
        let atom = graph.atom(index);
        token.push_str(&atom.symbol);

        if atom.pseudo {
            pseudo_atoms.push(atom.symbol.clone());
        }

        if let Some(&next) = path.get(i + 1) {
            let bond = graph.bond(index, next).ok_or_else(|| {
                eyre::eyre!("path atoms {} and {} are not bonded", index, next)
            })?;
            token.push(bond_symbol(bond));
        }
    }

    Ok(token)
}

/// One character per bond: `@` for an aromatic (sp2 ring) bond, otherwise
/// the digit for its fixed order, `5` for anything unspecified.
fn bond_symbol(bond: &Bond) -> char {
    if bond.is_sp2() {
        return '@';
    }
    match bond.order {
        BondOrder::Single => '1',
        BondOrder::Double => '2',
        BondOrder::Triple => '3',
        BondOrder::Quadruple => '4',
        BondOrder::Unspecified => '5',
    }
}
