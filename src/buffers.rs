use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Copies `src` into the `tgt_area` region of `tgt`, reading `src` from `src_offset`.
///
/// Cells that fall outside either buffer are skipped.
pub fn blit(tgt: &mut Buffer, src: &Buffer, tgt_area: Rect, src_offset: (u16, u16)) {
    let (src_offset_x, src_offset_y) = src_offset;
    let src_area = src.area;

    for rel_y in 0..tgt_area.height {
        for rel_x in 0..tgt_area.width {
            let tgt_pos = (
                tgt_area.x.saturating_add(rel_x),
                tgt_area.y.saturating_add(rel_y),
            );
            let src_pos = (
                src_area.x.saturating_add(rel_x).saturating_add(src_offset_x),
                src_area.y.saturating_add(rel_y).saturating_add(src_offset_y),
            );

            copy_cel(tgt, src, tgt_pos, src_pos);
        }
    }
}

#[inline(always)]
fn copy_cel(tgt: &mut Buffer, src: &Buffer, tgt_pos: (u16, u16), src_pos: (u16, u16)) {
    let Some(src_cell) = src.cell(src_pos) else {
        return;
    };
    let Some(tgt_cell) = tgt.cell_mut(tgt_pos) else {
        return;
    };
    tgt_cell.set_symbol(src_cell.symbol());
    tgt_cell.set_style(src_cell.style());
}

/// Renders each row of the buffer as a string.
#[cfg(test)]
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;

    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .filter_map(|x| buf.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect()
        })
        .collect()
}
