// Glyph bitmaps for the printable ASCII range ' '..='~', derived from the public
// domain X11 misc-fixed faces. Each glyph is stored column by column, left to right;
// every column is `ceil(size / 8)` bytes, top pixel in the most significant bit.

pub static ASCII_12: [[u8; 12]; 95] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '"'
    [0x00, 0x00, 0x38, 0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x04, 0x80, 0x0F, 0xC0, 0x04, 0x80, 0x0F, 0xC0, 0x04, 0x80, 0x00, 0x00],
    // '$'
    [0x0C, 0x80, 0x12, 0x40, 0x3F, 0xE0, 0x12, 0x40, 0x09, 0x80, 0x00, 0x00],
    // '%'
    [0x18, 0xC0, 0x19, 0x00, 0x02, 0x00, 0x04, 0xC0, 0x18, 0xC0, 0x00, 0x00],
    // '&'
    [0x0D, 0x80, 0x12, 0x40, 0x0D, 0x40, 0x00, 0x80, 0x01, 0x40, 0x00, 0x00],
    // '''
    [0x00, 0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x00, 0x07, 0x00, 0x18, 0xC0, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00],
    // ')'
    [0x00, 0x00, 0x20, 0x20, 0x18, 0xC0, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '*'
    [0x08, 0x80, 0x05, 0x00, 0x1F, 0xC0, 0x05, 0x00, 0x08, 0x80, 0x00, 0x00],
    // '+'
    [0x02, 0x00, 0x02, 0x00, 0x0F, 0x80, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00],
    // ','
    [0x00, 0x20, 0x00, 0xE0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '-'
    [0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '/'
    [0x00, 0x40, 0x01, 0x80, 0x02, 0x00, 0x0C, 0x00, 0x10, 0x00, 0x00, 0x00],
    // '0'
    [0x00, 0x00, 0x0F, 0x80, 0x10, 0x40, 0x10, 0x40, 0x0F, 0x80, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x08, 0x40, 0x1F, 0xC0, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00],
    // '2'
    [0x08, 0x40, 0x10, 0xC0, 0x11, 0x40, 0x12, 0x40, 0x0C, 0x40, 0x00, 0x00],
    // '3'
    [0x10, 0x80, 0x10, 0x40, 0x12, 0x40, 0x16, 0x40, 0x19, 0x80, 0x00, 0x00],
    // '4'
    [0x03, 0x00, 0x05, 0x00, 0x09, 0x00, 0x1F, 0xC0, 0x01, 0x00, 0x00, 0x00],
    // '5'
    [0x1C, 0x80, 0x14, 0x40, 0x14, 0x40, 0x14, 0x40, 0x13, 0x80, 0x00, 0x00],
    // '6'
    [0x07, 0x80, 0x0A, 0x40, 0x12, 0x40, 0x12, 0x40, 0x01, 0x80, 0x00, 0x00],
    // '7'
    [0x10, 0x00, 0x10, 0x00, 0x11, 0xC0, 0x16, 0x00, 0x18, 0x00, 0x00, 0x00],
    // '8'
    [0x0D, 0x80, 0x12, 0x40, 0x12, 0x40, 0x12, 0x40, 0x0D, 0x80, 0x00, 0x00],
    // '9'
    [0x0C, 0x00, 0x12, 0x40, 0x12, 0x40, 0x12, 0x80, 0x0F, 0x00, 0x00, 0x00],
    // ':'
    [0x00, 0x00, 0x06, 0xC0, 0x06, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ';'
    [0x00, 0x20, 0x06, 0xE0, 0x06, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '<'
    [0x00, 0x00, 0x02, 0x00, 0x05, 0x00, 0x08, 0x80, 0x00, 0x00, 0x00, 0x00],
    // '='
    [0x05, 0x00, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00, 0x00, 0x00],
    // '>'
    [0x00, 0x00, 0x08, 0x80, 0x05, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '?'
    [0x08, 0x00, 0x10, 0x00, 0x13, 0x40, 0x14, 0x00, 0x08, 0x00, 0x00, 0x00],
    // '@'
    [0x0F, 0x80, 0x10, 0x40, 0x17, 0x40, 0x15, 0x40, 0x0F, 0x00, 0x00, 0x00],
    // 'A'
    [0x0F, 0xC0, 0x12, 0x00, 0x12, 0x00, 0x12, 0x00, 0x0F, 0xC0, 0x00, 0x00],
    // 'B'
    [0x10, 0x40, 0x1F, 0xC0, 0x12, 0x40, 0x12, 0x40, 0x0D, 0x80, 0x00, 0x00],
    // 'C'
    [0x0F, 0x80, 0x10, 0x40, 0x10, 0x40, 0x10, 0x40, 0x08, 0x80, 0x00, 0x00],
    // 'D'
    [0x10, 0x40, 0x1F, 0xC0, 0x10, 0x40, 0x10, 0x40, 0x0F, 0x80, 0x00, 0x00],
    // 'E'
    [0x1F, 0xC0, 0x12, 0x40, 0x12, 0x40, 0x12, 0x40, 0x10, 0x40, 0x00, 0x00],
    // 'F'
    [0x1F, 0xC0, 0x12, 0x00, 0x12, 0x00, 0x12, 0x00, 0x10, 0x00, 0x00, 0x00],
    // 'G'
    [0x0F, 0x80, 0x10, 0x40, 0x10, 0x40, 0x11, 0x40, 0x09, 0x80, 0x00, 0x00],
    // 'H'
    [0x1F, 0xC0, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x1F, 0xC0, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x10, 0x40, 0x1F, 0xC0, 0x10, 0x40, 0x00, 0x00, 0x00, 0x00],
    // 'J'
    [0x00, 0x80, 0x00, 0x40, 0x10, 0x40, 0x1F, 0x80, 0x10, 0x00, 0x00, 0x00],
    // 'K'
    [0x1F, 0xC0, 0x02, 0x00, 0x05, 0x00, 0x08, 0x80, 0x10, 0x40, 0x00, 0x00],
    // 'L'
    [0x1F, 0xC0, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x00],
    // 'M'
    [0x1F, 0xC0, 0x08, 0x00, 0x04, 0x00, 0x08, 0x00, 0x1F, 0xC0, 0x00, 0x00],
    // 'N'
    [0x1F, 0xC0, 0x04, 0x00, 0x02, 0x00, 0x01, 0x00, 0x1F, 0xC0, 0x00, 0x00],
    // 'O'
    [0x0F, 0x80, 0x10, 0x40, 0x10, 0x40, 0x10, 0x40, 0x0F, 0x80, 0x00, 0x00],
    // 'P'
    [0x1F, 0xC0, 0x12, 0x00, 0x12, 0x00, 0x12, 0x00, 0x0C, 0x00, 0x00, 0x00],
    // 'Q'
    [0x0F, 0x80, 0x10, 0x40, 0x11, 0x40, 0x10, 0x80, 0x0F, 0x40, 0x00, 0x00],
    // 'R'
    [0x1F, 0xC0, 0x12, 0x00, 0x13, 0x00, 0x12, 0x80, 0x0C, 0x40, 0x00, 0x00],
    // 'S'
    [0x0C, 0x80, 0x12, 0x40, 0x12, 0x40, 0x12, 0x40, 0x09, 0x80, 0x00, 0x00],
    // 'T'
    [0x10, 0x00, 0x10, 0x00, 0x1F, 0xC0, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00],
    // 'U'
    [0x1F, 0x80, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x1F, 0x80, 0x00, 0x00],
    // 'V'
    [0x1E, 0x00, 0x01, 0x80, 0x00, 0x40, 0x01, 0x80, 0x1E, 0x00, 0x00, 0x00],
    // 'W'
    [0x1F, 0x80, 0x00, 0x40, 0x01, 0x80, 0x00, 0x40, 0x1F, 0x80, 0x00, 0x00],
    // 'X'
    [0x18, 0xC0, 0x05, 0x00, 0x02, 0x00, 0x05, 0x00, 0x18, 0xC0, 0x00, 0x00],
    // 'Y'
    [0x18, 0x00, 0x04, 0x00, 0x03, 0xC0, 0x04, 0x00, 0x18, 0x00, 0x00, 0x00],
    // 'Z'
    [0x10, 0xC0, 0x11, 0x40, 0x12, 0x40, 0x14, 0x40, 0x18, 0x40, 0x00, 0x00],
    // '['
    [0x00, 0x00, 0x3F, 0xE0, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00],
    // '\\'
    [0x10, 0x00, 0x0C, 0x00, 0x02, 0x00, 0x01, 0x80, 0x00, 0x40, 0x00, 0x00],
    // ']'
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x3F, 0xE0, 0x00, 0x00, 0x00, 0x00],
    // '^'
    [0x08, 0x00, 0x10, 0x00, 0x20, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00],
    // '_'
    [0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00],
    // '`'
    [0x00, 0x00, 0x20, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'a'
    [0x00, 0x80, 0x05, 0x40, 0x05, 0x40, 0x05, 0x40, 0x03, 0xC0, 0x00, 0x00],
    // 'b'
    [0x1F, 0xC0, 0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x03, 0x80, 0x00, 0x00],
    // 'c'
    [0x03, 0x80, 0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x02, 0x80, 0x00, 0x00],
    // 'd'
    [0x03, 0x80, 0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x1F, 0xC0, 0x00, 0x00],
    // 'e'
    [0x03, 0x80, 0x05, 0x40, 0x05, 0x40, 0x05, 0x40, 0x02, 0x00, 0x00, 0x00],
    // 'f'
    [0x02, 0x00, 0x0F, 0xC0, 0x12, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00],
    // 'g'
    [0x03, 0x80, 0x04, 0x50, 0x04, 0x50, 0x04, 0x50, 0x03, 0xE0, 0x00, 0x00],
    // 'h'
    [0x1F, 0xC0, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x03, 0xC0, 0x00, 0x00],
    // 'i'
    [0x00, 0x00, 0x04, 0x40, 0x17, 0xC0, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00],
    // 'j'
    [0x00, 0x00, 0x00, 0x20, 0x00, 0x10, 0x04, 0x10, 0x17, 0xE0, 0x00, 0x00],
    // 'k'
    [0x1F, 0xC0, 0x01, 0x00, 0x01, 0x00, 0x02, 0x80, 0x04, 0x40, 0x00, 0x00],
    // 'l'
    [0x00, 0x00, 0x10, 0x40, 0x1F, 0xC0, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00],
    // 'm'
    [0x07, 0xC0, 0x04, 0x00, 0x03, 0xC0, 0x04, 0x00, 0x03, 0xC0, 0x00, 0x00],
    // 'n'
    [0x07, 0xC0, 0x02, 0x00, 0x04, 0x00, 0x04, 0x00, 0x03, 0xC0, 0x00, 0x00],
    // 'o'
    [0x03, 0x80, 0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x03, 0x80, 0x00, 0x00],
    // 'p'
    [0x07, 0xF0, 0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x03, 0x80, 0x00, 0x00],
    // 'q'
    [0x03, 0x80, 0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x07, 0xF0, 0x00, 0x00],
    // 'r'
    [0x07, 0xC0, 0x02, 0x00, 0x04, 0x00, 0x04, 0x00, 0x02, 0x00, 0x00, 0x00],
    // 's'
    [0x02, 0x40, 0x05, 0x40, 0x05, 0x40, 0x05, 0x40, 0x04, 0x80, 0x00, 0x00],
    // 't'
    [0x04, 0x00, 0x04, 0x00, 0x1F, 0x80, 0x04, 0x40, 0x04, 0x40, 0x00, 0x00],
    // 'u'
    [0x07, 0x80, 0x00, 0x40, 0x00, 0x40, 0x00, 0x80, 0x07, 0xC0, 0x00, 0x00],
    // 'v'
    [0x07, 0x00, 0x00, 0x80, 0x00, 0x40, 0x00, 0x80, 0x07, 0x00, 0x00, 0x00],
    // 'w'
    [0x07, 0x80, 0x00, 0x40, 0x01, 0x80, 0x00, 0x40, 0x07, 0x80, 0x00, 0x00],
    // 'x'
    [0x04, 0x40, 0x02, 0x80, 0x01, 0x00, 0x02, 0x80, 0x04, 0x40, 0x00, 0x00],
    // 'y'
    [0x07, 0x10, 0x00, 0xA0, 0x00, 0x40, 0x00, 0x80, 0x07, 0x00, 0x00, 0x00],
    // 'z'
    [0x04, 0x40, 0x04, 0xC0, 0x05, 0x40, 0x06, 0x40, 0x04, 0x40, 0x00, 0x00],
    // '{'
    [0x00, 0x00, 0x02, 0x00, 0x1D, 0xC0, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00],
    // '|'
    [0x00, 0x00, 0x00, 0x00, 0x3F, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '}'
    [0x00, 0x00, 0x20, 0x20, 0x1D, 0xC0, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '~'
    [0x03, 0x00, 0x04, 0x00, 0x02, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00, 0x00],
];

pub static ASCII_16: [[u8; 16]; 95] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xD0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '"'
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x00, 0x00, 0x02, 0x80, 0x0F, 0xE0, 0x02, 0x80, 0x02, 0x80, 0x0F, 0xE0, 0x02, 0x80, 0x00, 0x00],
    // '$'
    [0x00, 0x00, 0x06, 0x20, 0x09, 0x20, 0x1F, 0xF0, 0x09, 0x20, 0x08, 0xC0, 0x00, 0x00, 0x00, 0x00],
    // '%'
    [0x00, 0x00, 0x08, 0x10, 0x14, 0x60, 0x08, 0x80, 0x03, 0x20, 0x04, 0x50, 0x18, 0x20, 0x00, 0x00],
    // '&'
    [0x00, 0x00, 0x03, 0x60, 0x04, 0x90, 0x04, 0x90, 0x03, 0x50, 0x00, 0x20, 0x00, 0x50, 0x00, 0x00],
    // '''
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80, 0x0C, 0x60, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00],
    // ')'
    [0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x0C, 0x60, 0x03, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '*'
    [0x00, 0x00, 0x04, 0x00, 0x15, 0x00, 0x0E, 0x00, 0x0E, 0x00, 0x15, 0x00, 0x04, 0x00, 0x00, 0x00],
    // '+'
    [0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x07, 0xC0, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ','
    [0x00, 0x00, 0x00, 0x08, 0x00, 0x30, 0x00, 0x30, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '-'
    [0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x38, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '/'
    [0x00, 0x30, 0x00, 0x40, 0x00, 0x80, 0x01, 0x00, 0x02, 0x00, 0x04, 0x00, 0x18, 0x00, 0x00, 0x00],
    // '0'
    [0x00, 0x00, 0x07, 0xC0, 0x08, 0x20, 0x10, 0x10, 0x10, 0x10, 0x08, 0x20, 0x07, 0xC0, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x04, 0x10, 0x08, 0x10, 0x1F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00],
    // '2'
    [0x00, 0x00, 0x0C, 0x30, 0x10, 0x50, 0x10, 0x90, 0x10, 0x90, 0x11, 0x10, 0x0E, 0x10, 0x00, 0x00],
    // '3'
    [0x00, 0x00, 0x10, 0x20, 0x10, 0x10, 0x11, 0x10, 0x13, 0x10, 0x15, 0x10, 0x18, 0xE0, 0x00, 0x00],
    // '4'
    [0x00, 0x00, 0x01, 0xC0, 0x02, 0x40, 0x04, 0x40, 0x08, 0x40, 0x1F, 0xF0, 0x00, 0x40, 0x00, 0x00],
    // '5'
    [0x00, 0x00, 0x1F, 0x20, 0x11, 0x10, 0x12, 0x10, 0x12, 0x10, 0x12, 0x10, 0x11, 0xE0, 0x00, 0x00],
    // '6'
    [0x00, 0x00, 0x07, 0xE0, 0x08, 0x90, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x00, 0xE0, 0x00, 0x00],
    // '7'
    [0x00, 0x00, 0x10, 0x00, 0x10, 0x30, 0x10, 0xC0, 0x13, 0x00, 0x14, 0x00, 0x18, 0x00, 0x00, 0x00],
    // '8'
    [0x00, 0x00, 0x0E, 0xE0, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x0E, 0xE0, 0x00, 0x00],
    // '9'
    [0x00, 0x00, 0x0E, 0x00, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x12, 0x20, 0x0F, 0xC0, 0x00, 0x00],
    // ':'
    [0x00, 0x00, 0x00, 0x00, 0x02, 0x10, 0x07, 0x38, 0x02, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ';'
    [0x00, 0x00, 0x00, 0x08, 0x02, 0x30, 0x07, 0x30, 0x02, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '<'
    [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x80, 0x04, 0x40, 0x08, 0x20, 0x10, 0x10, 0x00, 0x00],
    // '='
    [0x00, 0x00, 0x02, 0x40, 0x02, 0x40, 0x02, 0x40, 0x02, 0x40, 0x02, 0x40, 0x02, 0x40, 0x00, 0x00],
    // '>'
    [0x00, 0x00, 0x10, 0x10, 0x08, 0x20, 0x04, 0x40, 0x02, 0x80, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '?'
    [0x00, 0x00, 0x0C, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0xD0, 0x11, 0x00, 0x0E, 0x00, 0x00, 0x00],
    // '@'
    [0x00, 0x00, 0x0F, 0xE0, 0x10, 0x10, 0x11, 0x90, 0x12, 0x50, 0x12, 0x90, 0x0F, 0xC0, 0x00, 0x00],
    // 'A'
    [0x00, 0x00, 0x07, 0xF0, 0x08, 0x80, 0x10, 0x80, 0x10, 0x80, 0x08, 0x80, 0x07, 0xF0, 0x00, 0x00],
    // 'B'
    [0x00, 0x00, 0x1F, 0xF0, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x0A, 0xA0, 0x04, 0x40, 0x00, 0x00],
    // 'C'
    [0x00, 0x00, 0x0F, 0xE0, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x08, 0x20, 0x00, 0x00],
    // 'D'
    [0x00, 0x00, 0x1F, 0xF0, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x08, 0x20, 0x07, 0xC0, 0x00, 0x00],
    // 'E'
    [0x00, 0x00, 0x1F, 0xF0, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00],
    // 'F'
    [0x00, 0x00, 0x1F, 0xF0, 0x11, 0x00, 0x11, 0x00, 0x11, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00],
    // 'G'
    [0x00, 0x00, 0x0F, 0xE0, 0x10, 0x10, 0x10, 0x10, 0x10, 0x90, 0x10, 0xA0, 0x08, 0xF0, 0x00, 0x00],
    // 'H'
    [0x00, 0x00, 0x1F, 0xF0, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x1F, 0xF0, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x1F, 0xF0, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00],
    // 'J'
    [0x00, 0x00, 0x00, 0x20, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0xE0, 0x10, 0x00, 0x10, 0x00],
    // 'K'
    [0x00, 0x00, 0x1F, 0xF0, 0x01, 0x00, 0x02, 0x80, 0x04, 0x40, 0x08, 0x20, 0x10, 0x10, 0x00, 0x00],
    // 'L'
    [0x00, 0x00, 0x1F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00],
    // 'M'
    [0x1F, 0xF0, 0x04, 0x00, 0x02, 0x00, 0x01, 0x80, 0x02, 0x00, 0x04, 0x00, 0x1F, 0xF0, 0x00, 0x00],
    // 'N'
    [0x00, 0x00, 0x1F, 0xF0, 0x04, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x80, 0x1F, 0xF0, 0x00, 0x00],
    // 'O'
    [0x00, 0x00, 0x0F, 0xE0, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0F, 0xE0, 0x00, 0x00],
    // 'P'
    [0x00, 0x00, 0x1F, 0xF0, 0x11, 0x00, 0x11, 0x00, 0x11, 0x00, 0x11, 0x00, 0x0E, 0x00, 0x00, 0x00],
    // 'Q'
    [0x00, 0x00, 0x0F, 0xE0, 0x10, 0x10, 0x10, 0x50, 0x10, 0x30, 0x10, 0x10, 0x0F, 0xE8, 0x00, 0x00],
    // 'R'
    [0x00, 0x00, 0x1F, 0xF0, 0x11, 0x00, 0x11, 0x80, 0x11, 0x40, 0x11, 0x20, 0x0E, 0x10, 0x00, 0x00],
    // 'S'
    [0x00, 0x00, 0x0E, 0x20, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x11, 0x10, 0x08, 0xE0, 0x00, 0x00],
    // 'T'
    [0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x1F, 0xF0, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00],
    // 'U'
    [0x00, 0x00, 0x1F, 0xE0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x1F, 0xE0, 0x00, 0x00],
    // 'V'
    [0x18, 0x00, 0x07, 0x00, 0x00, 0xE0, 0x00, 0x10, 0x00, 0xE0, 0x07, 0x00, 0x18, 0x00, 0x00, 0x00],
    // 'W'
    [0x1F, 0xE0, 0x00, 0x10, 0x00, 0x20, 0x01, 0xC0, 0x00, 0x20, 0x00, 0x10, 0x1F, 0xE0, 0x00, 0x00],
    // 'X'
    [0x18, 0x30, 0x04, 0x40, 0x02, 0x80, 0x01, 0x00, 0x02, 0x80, 0x04, 0x40, 0x18, 0x30, 0x00, 0x00],
    // 'Y'
    [0x18, 0x00, 0x04, 0x00, 0x02, 0x00, 0x01, 0xF0, 0x02, 0x00, 0x04, 0x00, 0x18, 0x00, 0x00, 0x00],
    // 'Z'
    [0x00, 0x00, 0x10, 0x70, 0x10, 0x90, 0x11, 0x10, 0x12, 0x10, 0x14, 0x10, 0x18, 0x10, 0x00, 0x00],
    // '['
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0xF0, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00],
    // '\\'
    [0x18, 0x00, 0x04, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x80, 0x00, 0x40, 0x00, 0x30, 0x00, 0x00],
    // ']'
    [0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '^'
    [0x00, 0x00, 0x04, 0x00, 0x08, 0x00, 0x10, 0x00, 0x08, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '_'
    [0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x00],
    // '`'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'a'
    [0x00, 0x00, 0x00, 0x60, 0x02, 0x90, 0x02, 0x90, 0x02, 0x90, 0x02, 0xA0, 0x01, 0xF0, 0x00, 0x00],
    // 'b'
    [0x00, 0x00, 0x1F, 0xF0, 0x01, 0x20, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x01, 0xE0, 0x00, 0x00],
    // 'c'
    [0x00, 0x00, 0x01, 0xE0, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x01, 0x20, 0x00, 0x00],
    // 'd'
    [0x00, 0x00, 0x01, 0xE0, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x01, 0x20, 0x1F, 0xF0, 0x00, 0x00],
    // 'e'
    [0x00, 0x00, 0x01, 0xE0, 0x02, 0x90, 0x02, 0x90, 0x02, 0x90, 0x02, 0x90, 0x01, 0xA0, 0x00, 0x00],
    // 'f'
    [0x00, 0x00, 0x01, 0x00, 0x0F, 0xF0, 0x11, 0x00, 0x11, 0x00, 0x11, 0x00, 0x08, 0x00, 0x00, 0x00],
    // 'g'
    [0x00, 0x00, 0x01, 0xA8, 0x02, 0x54, 0x02, 0x54, 0x02, 0x54, 0x01, 0x94, 0x02, 0x08, 0x00, 0x00],
    // 'h'
    [0x00, 0x00, 0x1F, 0xF0, 0x01, 0x00, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0xF0, 0x00, 0x00],
    // 'i'
    [0x00, 0x00, 0x00, 0x10, 0x02, 0x10, 0x0B, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00],
    // 'j'
    [0x00, 0x00, 0x00, 0x18, 0x00, 0x04, 0x00, 0x04, 0x02, 0x04, 0x0B, 0xF8, 0x00, 0x00, 0x00, 0x00],
    // 'k'
    [0x00, 0x00, 0x1F, 0xF0, 0x00, 0x80, 0x00, 0x80, 0x01, 0x40, 0x02, 0x20, 0x00, 0x10, 0x00, 0x00],
    // 'l'
    [0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x1F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00],
    // 'm'
    [0x03, 0xF0, 0x02, 0x00, 0x02, 0x00, 0x01, 0xE0, 0x02, 0x00, 0x02, 0x00, 0x01, 0xF0, 0x00, 0x00],
    // 'n'
    [0x00, 0x00, 0x03, 0xF0, 0x01, 0x00, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0xF0, 0x00, 0x00],
    // 'o'
    [0x00, 0x00, 0x01, 0xE0, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x01, 0xE0, 0x00, 0x00],
    // 'p'
    [0x00, 0x00, 0x03, 0xFC, 0x01, 0x40, 0x02, 0x20, 0x02, 0x20, 0x02, 0x20, 0x01, 0xC0, 0x00, 0x00],
    // 'q'
    [0x00, 0x00, 0x01, 0xC0, 0x02, 0x20, 0x02, 0x20, 0x02, 0x20, 0x01, 0x40, 0x03, 0xFC, 0x00, 0x00],
    // 'r'
    [0x00, 0x00, 0x02, 0x00, 0x01, 0xF0, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00],
    // 's'
    [0x00, 0x00, 0x01, 0x20, 0x02, 0x90, 0x02, 0x90, 0x02, 0x50, 0x02, 0x50, 0x01, 0x20, 0x00, 0x00],
    // 't'
    [0x00, 0x00, 0x02, 0x00, 0x0F, 0xE0, 0x02, 0x10, 0x02, 0x10, 0x02, 0x10, 0x00, 0x20, 0x00, 0x00],
    // 'u'
    [0x00, 0x00, 0x03, 0xE0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x03, 0xE0, 0x00, 0x10, 0x00, 0x00],
    // 'v'
    [0x00, 0x00, 0x03, 0x80, 0x00, 0x60, 0x00, 0x10, 0x00, 0x60, 0x03, 0x80, 0x00, 0x00, 0x00, 0x00],
    // 'w'
    [0x03, 0xE0, 0x00, 0x10, 0x00, 0x20, 0x00, 0xC0, 0x00, 0x20, 0x00, 0x10, 0x03, 0xE0, 0x00, 0x00],
    // 'x'
    [0x00, 0x00, 0x02, 0x10, 0x01, 0x20, 0x00, 0xC0, 0x00, 0xC0, 0x01, 0x20, 0x02, 0x10, 0x00, 0x00],
    // 'y'
    [0x00, 0x00, 0x03, 0xC8, 0x00, 0x24, 0x00, 0x24, 0x00, 0x24, 0x00, 0x44, 0x03, 0xF8, 0x00, 0x00],
    // 'z'
    [0x00, 0x00, 0x02, 0x10, 0x02, 0x30, 0x02, 0x50, 0x02, 0x90, 0x03, 0x10, 0x02, 0x10, 0x00, 0x00],
    // '{'
    [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x0D, 0x60, 0x12, 0x90, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00],
    // '|'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '}'
    [0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x12, 0x90, 0x0D, 0x60, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '~'
    [0x00, 0x00, 0x0C, 0x00, 0x10, 0x00, 0x08, 0x00, 0x04, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00],
];

pub static ASCII_24: [[u8; 36]; 95] = [
    // ' '
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '!'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07,
        0xFE, 0xC0, 0x07, 0xFE, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '"'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x07, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x80, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '#'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x47, 0x80, 0x00, 0x7F, 0x80, 0x03,
        0xFC, 0x00, 0x03, 0xC7, 0x80, 0x00, 0x7F, 0x80, 0x03, 0xFC, 0x00, 0x03, 0xC4, 0x00, 0x00, 0x40,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '$'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xE1, 0x00, 0x03, 0xF1, 0x80, 0x02, 0x10, 0x80, 0x07,
        0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x02, 0x10, 0x80, 0x03, 0x1F, 0x80, 0x01, 0x0F, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '%'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x80, 0x00, 0x03, 0xC0, 0xC0, 0x02, 0x43, 0xC0, 0x03,
        0xCF, 0x00, 0x01, 0xBD, 0x80, 0x00, 0xF3, 0xC0, 0x03, 0xC2, 0x40, 0x03, 0x03, 0xC0, 0x00, 0x01,
        0x80, 0x00, 0x00, 0x00,
    ],
    // '&'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x80, 0x03, 0xDF, 0xC0, 0x07, 0xF0, 0xC0, 0x04,
        0x78, 0x40, 0x07, 0xCC, 0xC0, 0x03, 0x87, 0x80, 0x00, 0x03, 0x80, 0x00, 0x06, 0xC0, 0x00, 0x04,
        0x40, 0x00, 0x00, 0x00,
    ],
    // '''
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07,
        0xC0, 0x00, 0x07, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '('
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x01,
        0xFF, 0x00, 0x03, 0x83, 0x80, 0x06, 0x00, 0xC0, 0x04, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // ')'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x40, 0x06, 0x00, 0xC0, 0x03,
        0x83, 0x80, 0x01, 0xFF, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '*'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0xD6, 0x00, 0x00, 0xFE, 0x00, 0x00,
        0x38, 0x00, 0x00, 0x38, 0x00, 0x00, 0xFE, 0x00, 0x00, 0xD6, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '+'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00,
        0xFE, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // ','
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00,
        0x00, 0xE0, 0x00, 0x00, 0xE0, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '-'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00,
        0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '.'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '/'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x03, 0xC0, 0x00,
        0x0F, 0x00, 0x00, 0x3C, 0x00, 0x00, 0xF0, 0x00, 0x03, 0xC0, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '0'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x01, 0xFF, 0x00, 0x03, 0x83, 0x80, 0x06,
        0x00, 0xC0, 0x06, 0x00, 0xC0, 0x03, 0x83, 0x80, 0x01, 0xFF, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '1'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x40, 0x01, 0x80, 0x40, 0x03, 0x00, 0x40, 0x07,
        0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '2'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x81, 0xC0, 0x03, 0x83, 0xC0, 0x06, 0x06, 0x40, 0x04,
        0x0C, 0x40, 0x04, 0x08, 0x40, 0x06, 0x18, 0x40, 0x03, 0xF0, 0x40, 0x01, 0xE0, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '3'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x83, 0x00, 0x03, 0x83, 0x80, 0x06, 0x00, 0xC0, 0x04,
        0x10, 0x40, 0x04, 0x10, 0x40, 0x06, 0x38, 0xC0, 0x03, 0xEF, 0x80, 0x01, 0xC7, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '4'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x64, 0x00, 0x00,
        0xC4, 0x00, 0x01, 0x84, 0x00, 0x03, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '5'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xF1, 0x00, 0x07, 0xF1, 0x80, 0x04, 0x10, 0xC0, 0x04,
        0x20, 0x40, 0x04, 0x20, 0x40, 0x04, 0x30, 0xC0, 0x04, 0x1F, 0x80, 0x04, 0x0F, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '6'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x03, 0xFF, 0x80, 0x06, 0x10, 0xC0, 0x04,
        0x20, 0x40, 0x04, 0x20, 0x40, 0x06, 0x30, 0xC0, 0x03, 0x1F, 0x80, 0x00, 0x0F, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '7'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0xC0, 0x04, 0x03, 0xC0, 0x04,
        0x0F, 0x00, 0x04, 0x3C, 0x00, 0x04, 0xF0, 0x00, 0x07, 0xC0, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '8'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xC7, 0x00, 0x03, 0xEF, 0x80, 0x06, 0x38, 0xC0, 0x04,
        0x10, 0x40, 0x04, 0x10, 0x40, 0x06, 0x38, 0xC0, 0x03, 0xEF, 0x80, 0x01, 0xC7, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '9'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x00, 0x03, 0xF1, 0x80, 0x06, 0x18, 0xC0, 0x04,
        0x08, 0x40, 0x04, 0x08, 0x40, 0x06, 0x10, 0xC0, 0x03, 0xFF, 0x80, 0x01, 0xFF, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // ':'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x30, 0xC0, 0x00, 0x30, 0xC0, 0x00, 0x30, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // ';'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00,
        0x30, 0xE0, 0x00, 0x30, 0xE0, 0x00, 0x30, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '<'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x38, 0x00, 0x00, 0x6C, 0x00, 0x00,
        0xC6, 0x00, 0x01, 0x83, 0x00, 0x03, 0x01, 0x80, 0x06, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '='
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x42, 0x00, 0x00, 0x42, 0x00, 0x00, 0x42, 0x00, 0x00,
        0x42, 0x00, 0x00, 0x42, 0x00, 0x00, 0x42, 0x00, 0x00, 0x42, 0x00, 0x00, 0x42, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '>'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x00, 0xC0, 0x03, 0x01, 0x80, 0x01,
        0x83, 0x00, 0x00, 0xC6, 0x00, 0x00, 0x6C, 0x00, 0x00, 0x38, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '?'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x06, 0x00, 0x00, 0x04,
        0x0E, 0xC0, 0x04, 0x1E, 0xC0, 0x06, 0x30, 0x00, 0x03, 0xE0, 0x00, 0x01, 0xC0, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '@'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x03, 0xFF, 0x80, 0x06, 0x00, 0xC0, 0x04,
        0x7C, 0x40, 0x04, 0xFE, 0x40, 0x06, 0xC6, 0x40, 0x03, 0xFC, 0xC0, 0x01, 0xF8, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'A'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xC0, 0x01, 0xFF, 0xC0, 0x03, 0x88, 0x00, 0x06,
        0x08, 0x00, 0x06, 0x08, 0x00, 0x03, 0x88, 0x00, 0x01, 0xFF, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'B'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x10, 0x40, 0x04,
        0x10, 0x40, 0x06, 0x30, 0x40, 0x03, 0xF8, 0xC0, 0x01, 0xCF, 0x80, 0x00, 0x07, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'C'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x03, 0xFF, 0x80, 0x06, 0x00, 0xC0, 0x04,
        0x00, 0x40, 0x04, 0x00, 0x40, 0x06, 0x00, 0xC0, 0x03, 0x01, 0x80, 0x01, 0x01, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'D'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x00, 0x40, 0x04,
        0x00, 0x40, 0x04, 0x00, 0x40, 0x06, 0x00, 0xC0, 0x03, 0xFF, 0x80, 0x01, 0xFF, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'E'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x10, 0x40, 0x04,
        0x10, 0x40, 0x04, 0x10, 0x40, 0x04, 0x10, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'F'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x10, 0x00, 0x04,
        0x10, 0x00, 0x04, 0x10, 0x00, 0x04, 0x10, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'G'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x03, 0xFF, 0x80, 0x06, 0x00, 0xC0, 0x04,
        0x00, 0x40, 0x04, 0x10, 0x40, 0x06, 0x10, 0xC0, 0x03, 0x1F, 0x80, 0x01, 0x1F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'H'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x10, 0x00, 0x00,
        0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'I'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x07,
        0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'J'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x80, 0x00, 0x00, 0xC0, 0x04,
        0x00, 0x40, 0x04, 0x00, 0xC0, 0x07, 0xFF, 0x80, 0x07, 0xFF, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'K'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x10, 0x00, 0x00,
        0x10, 0x00, 0x00, 0x7C, 0x00, 0x01, 0xEF, 0x00, 0x07, 0x83, 0xC0, 0x06, 0x00, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'L'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00,
        0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'M'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x01, 0xC0, 0x00, 0x00,
        0x7C, 0x00, 0x00, 0x7C, 0x00, 0x01, 0xC0, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'N'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x03, 0xC0, 0x00, 0x00,
        0xF0, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x0F, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'O'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x03, 0xFF, 0x80, 0x06, 0x00, 0xC0, 0x04,
        0x00, 0x40, 0x04, 0x00, 0x40, 0x06, 0x00, 0xC0, 0x03, 0xFF, 0x80, 0x01, 0xFF, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'P'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x08, 0x00, 0x04,
        0x08, 0x00, 0x04, 0x08, 0x00, 0x06, 0x18, 0x00, 0x03, 0xF0, 0x00, 0x01, 0xE0, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'Q'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x03, 0xFF, 0x80, 0x06, 0x00, 0xC0, 0x04,
        0x02, 0x40, 0x04, 0x03, 0x40, 0x06, 0x01, 0xC0, 0x03, 0xFF, 0xE0, 0x01, 0xFF, 0x20, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'R'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x08, 0x00, 0x04,
        0x08, 0x00, 0x04, 0x0C, 0x00, 0x06, 0x1F, 0x00, 0x03, 0xF3, 0xC0, 0x01, 0xE0, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'S'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xC1, 0x00, 0x03, 0xE1, 0x80, 0x06, 0x30, 0xC0, 0x04,
        0x10, 0x40, 0x04, 0x10, 0x40, 0x06, 0x18, 0xC0, 0x03, 0x0F, 0x80, 0x01, 0x07, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'T'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x07,
        0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'U'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0x00, 0x07, 0xFF, 0x80, 0x00, 0x00, 0xC0, 0x00,
        0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0xC0, 0x07, 0xFF, 0x80, 0x07, 0xFF, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'V'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x80, 0x00, 0x07, 0xF0, 0x00, 0x00, 0x7E, 0x00, 0x00,
        0x0F, 0xC0, 0x00, 0x0F, 0xC0, 0x00, 0x7E, 0x00, 0x07, 0xF0, 0x00, 0x07, 0x80, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'W'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x03, 0x00, 0x00,
        0x3C, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x03, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'X'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x00, 0xC0, 0x07, 0x83, 0xC0, 0x01, 0xEF, 0x00, 0x00,
        0x7C, 0x00, 0x00, 0x7C, 0x00, 0x01, 0xEF, 0x00, 0x07, 0x83, 0xC0, 0x06, 0x00, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'Y'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x07, 0x80, 0x00, 0x01, 0xE0, 0x00, 0x00,
        0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x01, 0xE0, 0x00, 0x07, 0x80, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'Z'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x01, 0xC0, 0x04, 0x03, 0xC0, 0x04, 0x0E, 0x40, 0x04,
        0x1C, 0x40, 0x04, 0x70, 0x40, 0x04, 0xE0, 0x40, 0x07, 0x80, 0x40, 0x07, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '['
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x04,
        0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '\\'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00,
        0xF0, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // ']'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04,
        0x00, 0x40, 0x04, 0x00, 0x40, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '^'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x01, 0x80, 0x00, 0x03, 0x00, 0x00, 0x06,
        0x00, 0x00, 0x06, 0x00, 0x00, 0x03, 0x00, 0x00, 0x01, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '_'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00,
        0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00,
        0x20, 0x00, 0x00, 0x00,
    ],
    // '`'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x06,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'a'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80, 0x00, 0x17, 0xC0, 0x00, 0x34, 0x40, 0x00,
        0x24, 0x40, 0x00, 0x24, 0x40, 0x00, 0x24, 0x40, 0x00, 0x3F, 0x80, 0x00, 0x1F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'b'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x10, 0x80, 0x00,
        0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x30, 0xC0, 0x00, 0x1F, 0x80, 0x00, 0x0F, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'c'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x1F, 0x80, 0x00, 0x30, 0xC0, 0x00,
        0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x30, 0xC0, 0x00, 0x10, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'd'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x1F, 0x80, 0x00, 0x30, 0xC0, 0x00,
        0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x10, 0x80, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'e'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x1F, 0x80, 0x00, 0x34, 0xC0, 0x00,
        0x24, 0x40, 0x00, 0x24, 0x40, 0x00, 0x34, 0x40, 0x00, 0x1C, 0xC0, 0x00, 0x0C, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'f'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x03, 0xFF, 0xC0, 0x07,
        0xFF, 0xC0, 0x04, 0x20, 0x00, 0x04, 0x20, 0x00, 0x07, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'g'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1E, 0xB8, 0x00, 0x3F, 0xFC, 0x00, 0x21, 0x44, 0x00,
        0x21, 0x44, 0x00, 0x21, 0x44, 0x00, 0x3F, 0x44, 0x00, 0x1E, 0x7C, 0x00, 0x30, 0x38, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'h'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x10, 0x00, 0x00,
        0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x30, 0x00, 0x00, 0x1F, 0xC0, 0x00, 0x0F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'i'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x20, 0x40, 0x00, 0x20, 0x40, 0x01,
        0xBF, 0xC0, 0x01, 0xBF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'j'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x3C, 0x00,
        0x00, 0x04, 0x00, 0x20, 0x04, 0x00, 0x20, 0x04, 0x01, 0xBF, 0xFC, 0x01, 0xBF, 0xF8, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'k'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x06, 0x00, 0x00,
        0x0E, 0x00, 0x00, 0x1B, 0x00, 0x00, 0x31, 0x80, 0x00, 0x20, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'l'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x07,
        0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'm'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x00, 0x1F, 0xC0, 0x00, 0x30, 0x00, 0x00,
        0x3F, 0xC0, 0x00, 0x1F, 0xC0, 0x00, 0x30, 0x00, 0x00, 0x3F, 0xC0, 0x00, 0x1F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'n'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x00, 0x3F, 0xC0, 0x00, 0x10, 0x00, 0x00,
        0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x30, 0x00, 0x00, 0x1F, 0xC0, 0x00, 0x0F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'o'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x1F, 0x80, 0x00, 0x30, 0xC0, 0x00,
        0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x30, 0xC0, 0x00, 0x1F, 0x80, 0x00, 0x0F, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'p'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xFC, 0x00, 0x3F, 0xFC, 0x00, 0x10, 0x80, 0x00,
        0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x30, 0xC0, 0x00, 0x1F, 0x80, 0x00, 0x0F, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'q'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x1F, 0x80, 0x00, 0x30, 0xC0, 0x00,
        0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x10, 0x80, 0x00, 0x3F, 0xFC, 0x00, 0x3F, 0xFC, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'r'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x3F, 0xC0, 0x00, 0x1F, 0xC0, 0x00,
        0x30, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x30, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 's'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x80, 0x00, 0x3C, 0xC0, 0x00, 0x24, 0x40, 0x00,
        0x24, 0x40, 0x00, 0x24, 0x40, 0x00, 0x24, 0x40, 0x00, 0x37, 0xC0, 0x00, 0x13, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 't'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x01, 0xFF, 0x80, 0x01,
        0xFF, 0xC0, 0x00, 0x20, 0x40, 0x00, 0x20, 0x40, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'u'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x80, 0x00, 0x00, 0xC0, 0x00,
        0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x80, 0x00, 0x3F, 0xC0, 0x00, 0x3F, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'v'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x0F, 0x00, 0x00,
        0x03, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x0F, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'w'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80, 0x00, 0x3F, 0xC0, 0x00, 0x00, 0xC0, 0x00,
        0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x00, 0xC0, 0x00, 0x3F, 0xC0, 0x00, 0x3F, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'x'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x40, 0x00, 0x30, 0xC0, 0x00, 0x19, 0x80, 0x00,
        0x0F, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x19, 0x80, 0x00, 0x30, 0xC0, 0x00, 0x20, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'y'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x10, 0x00, 0x3F, 0x98, 0x00, 0x00, 0xCC, 0x00,
        0x00, 0x44, 0x00, 0x00, 0x44, 0x00, 0x00, 0x8C, 0x00, 0x3F, 0xF8, 0x00, 0x3F, 0xF0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 'z'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0xC0, 0x00, 0x21, 0xC0, 0x00,
        0x23, 0x40, 0x00, 0x26, 0x40, 0x00, 0x2C, 0x40, 0x00, 0x38, 0x40, 0x00, 0x30, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '{'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x03,
        0xFF, 0x80, 0x07, 0xEF, 0xC0, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '|'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07,
        0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '}'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x07,
        0xEF, 0xC0, 0x03, 0xFF, 0x80, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // '~'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x07, 0x00, 0x00, 0x04, 0x00, 0x00, 0x06,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x01, 0x00, 0x00, 0x07, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
];

pub static ASCII_32: [[u8; 64]; 95] = [
    // ' '
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '!'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xF3, 0x00, 0x03, 0xFF, 0xF3, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '"'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '#'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00,
        0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00,
        0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00,
        0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '$'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x0C, 0x00, 0x00, 0x3C, 0x0C, 0x00,
        0x00, 0xC3, 0x0C, 0x00, 0x00, 0xC3, 0x0C, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0xC3, 0x0C, 0x00, 0x00, 0xC3, 0x0C, 0x00, 0x00, 0xC0, 0xF0, 0x00, 0x00, 0xC0, 0xF0, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '%'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x03, 0x00, 0x00, 0xC0, 0x03, 0x00,
        0x03, 0x30, 0x3C, 0x00, 0x03, 0x30, 0x3C, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0x00,
        0x00, 0x0F, 0x0C, 0x00, 0x00, 0x0F, 0x0C, 0x00, 0x00, 0x30, 0x33, 0x00, 0x00, 0x30, 0x33, 0x00,
        0x03, 0xC0, 0x0C, 0x00, 0x03, 0xC0, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '&'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x3C, 0x00, 0x00, 0x0F, 0x3C, 0x00,
        0x00, 0x30, 0xC3, 0x00, 0x00, 0x30, 0xC3, 0x00, 0x00, 0x30, 0xC3, 0x00, 0x00, 0x30, 0xC3, 0x00,
        0x00, 0x0F, 0x33, 0x00, 0x00, 0x0F, 0x33, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00,
        0x00, 0x00, 0x33, 0x00, 0x00, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '''
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '('
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x00, 0x00, 0x0F, 0xC0, 0x00,
        0x00, 0xF0, 0x3C, 0x00, 0x00, 0xF0, 0x3C, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ')'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0xF0, 0x3C, 0x00, 0x00, 0xF0, 0x3C, 0x00,
        0x00, 0x0F, 0xC0, 0x00, 0x00, 0x0F, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '*'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x03, 0x33, 0x00, 0x00, 0x03, 0x33, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00,
        0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x03, 0x33, 0x00, 0x00, 0x03, 0x33, 0x00, 0x00,
        0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '+'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x00, 0x00, 0x3F, 0xF0, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ','
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0,
        0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '-'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '.'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x00, 0x00, 0x0F, 0xC0,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '/'
    [
        0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00,
        0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '0'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x00, 0x00, 0x3F, 0xF0, 0x00,
        0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00,
        0x00, 0x3F, 0xF0, 0x00, 0x00, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '1'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x03, 0x00, 0x00, 0x30, 0x03, 0x00,
        0x00, 0xC0, 0x03, 0x00, 0x00, 0xC0, 0x03, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '2'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x0F, 0x00, 0x00, 0xF0, 0x0F, 0x00,
        0x03, 0x00, 0x33, 0x00, 0x03, 0x00, 0x33, 0x00, 0x03, 0x00, 0xC3, 0x00, 0x03, 0x00, 0xC3, 0x00,
        0x03, 0x00, 0xC3, 0x00, 0x03, 0x00, 0xC3, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x00, 0xFC, 0x03, 0x00, 0x00, 0xFC, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '3'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x03, 0x00, 0x0C, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x0F, 0x03, 0x00, 0x03, 0x0F, 0x03, 0x00, 0x03, 0x33, 0x03, 0x00, 0x03, 0x33, 0x03, 0x00,
        0x03, 0xC0, 0xFC, 0x00, 0x03, 0xC0, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '4'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00,
        0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00,
        0x00, 0xC0, 0x30, 0x00, 0x00, 0xC0, 0x30, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '5'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0x0C, 0x00, 0x03, 0xFF, 0x0C, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x0C, 0x03, 0x00, 0x03, 0x0C, 0x03, 0x00,
        0x03, 0x0C, 0x03, 0x00, 0x03, 0x0C, 0x03, 0x00, 0x03, 0x0C, 0x03, 0x00, 0x03, 0x0C, 0x03, 0x00,
        0x03, 0x03, 0xFC, 0x00, 0x03, 0x03, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '6'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xFC, 0x00, 0x00, 0x3F, 0xFC, 0x00,
        0x00, 0xC0, 0xC3, 0x00, 0x00, 0xC0, 0xC3, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '7'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x0F, 0x00, 0x03, 0x00, 0x0F, 0x00, 0x03, 0x00, 0xF0, 0x00, 0x03, 0x00, 0xF0, 0x00,
        0x03, 0x0F, 0x00, 0x00, 0x03, 0x0F, 0x00, 0x00, 0x03, 0x30, 0x00, 0x00, 0x03, 0x30, 0x00, 0x00,
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '8'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0xFC, 0x00, 0x00, 0xFC, 0xFC, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x00, 0xFC, 0xFC, 0x00, 0x00, 0xFC, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '9'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x0C, 0x0C, 0x00, 0x03, 0x0C, 0x0C, 0x00,
        0x00, 0xFF, 0xF0, 0x00, 0x00, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ':'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x3F, 0x0F, 0xC0, 0x00, 0x3F, 0x0F, 0xC0,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ';'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0,
        0x00, 0x0C, 0x0F, 0x00, 0x00, 0x0C, 0x0F, 0x00, 0x00, 0x3F, 0x0F, 0x00, 0x00, 0x3F, 0x0F, 0x00,
        0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '<'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00,
        0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '='
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00,
        0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00,
        0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00,
        0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '>'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00,
        0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '?'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x03, 0x00, 0xF3, 0x00, 0x03, 0x00, 0xF3, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
        0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '@'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x03, 0xC3, 0x00, 0x03, 0x03, 0xC3, 0x00,
        0x03, 0x0C, 0x33, 0x00, 0x03, 0x0C, 0x33, 0x00, 0x03, 0x0C, 0xC3, 0x00, 0x03, 0x0C, 0xC3, 0x00,
        0x00, 0xFF, 0xF0, 0x00, 0x00, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'A'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xFF, 0x00, 0x00, 0x3F, 0xFF, 0x00,
        0x00, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x03, 0x00, 0xC0, 0x00, 0x03, 0x00, 0xC0, 0x00,
        0x03, 0x00, 0xC0, 0x00, 0x03, 0x00, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0x00,
        0x00, 0x3F, 0xFF, 0x00, 0x00, 0x3F, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'B'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x00, 0xCC, 0xCC, 0x00, 0x00, 0xCC, 0xCC, 0x00,
        0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'C'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'D'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00,
        0x00, 0x3F, 0xF0, 0x00, 0x00, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'E'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'F'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
        0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'G'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0xC3, 0x00, 0x03, 0x00, 0xC3, 0x00, 0x03, 0x00, 0xCC, 0x00, 0x03, 0x00, 0xCC, 0x00,
        0x00, 0xC0, 0xFF, 0x00, 0x00, 0xC0, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'H'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'I'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'J'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0xFF, 0xFC, 0x00, 0x03, 0xFF, 0xFC, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
    ],
    // 'K'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00,
        0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0xC0, 0x0C, 0x00, 0x00, 0xC0, 0x0C, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'L'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'M'
    [
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'N'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00,
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'O'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'P'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
        0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
        0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Q'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x33, 0x00, 0x03, 0x00, 0x33, 0x00,
        0x03, 0x00, 0x0F, 0x00, 0x03, 0x00, 0x0F, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0xFF, 0xFC, 0xC0, 0x00, 0xFF, 0xFC, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'R'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0xC0, 0x00, 0x03, 0x03, 0xC0, 0x00,
        0x03, 0x03, 0x30, 0x00, 0x03, 0x03, 0x30, 0x00, 0x03, 0x03, 0x0C, 0x00, 0x03, 0x03, 0x0C, 0x00,
        0x00, 0xFC, 0x03, 0x00, 0x00, 0xFC, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'S'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x0C, 0x00, 0x00, 0xFC, 0x0C, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x00, 0xC0, 0xFC, 0x00, 0x00, 0xC0, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'T'
    [
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'U'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFC, 0x00, 0x03, 0xFF, 0xFC, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x03, 0xFF, 0xFC, 0x00, 0x03, 0xFF, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'V'
    [
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00,
        0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00,
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'W'
    [
        0x03, 0xFF, 0xFC, 0x00, 0x03, 0xFF, 0xFC, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x03, 0xFF, 0xFC, 0x00, 0x03, 0xFF, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'X'
    [
        0x03, 0xC0, 0x0F, 0x00, 0x03, 0xC0, 0x0F, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00,
        0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x0C, 0xC0, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00,
        0x03, 0xC0, 0x0F, 0x00, 0x03, 0xC0, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Y'
    [
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x03, 0xFF, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Z'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x3F, 0x00, 0x03, 0x00, 0x3F, 0x00,
        0x03, 0x00, 0xC3, 0x00, 0x03, 0x00, 0xC3, 0x00, 0x03, 0x03, 0x03, 0x00, 0x03, 0x03, 0x03, 0x00,
        0x03, 0x0C, 0x03, 0x00, 0x03, 0x0C, 0x03, 0x00, 0x03, 0x30, 0x03, 0x00, 0x03, 0x30, 0x03, 0x00,
        0x03, 0xC0, 0x03, 0x00, 0x03, 0xC0, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '['
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '\\'
    [
        0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00,
        0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ']'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '^'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '_'
    [
        0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0,
        0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0,
        0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0,
        0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '`'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'a'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x3C, 0x00,
        0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00,
        0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xCC, 0x00, 0x00, 0x0C, 0xCC, 0x00,
        0x00, 0x03, 0xFF, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'b'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'c'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'd'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00,
        0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'e'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00,
        0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00,
        0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00,
        0x00, 0x03, 0xCC, 0x00, 0x00, 0x03, 0xCC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'f'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
        0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
        0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'g'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xCC, 0xC0, 0x00, 0x03, 0xCC, 0xC0,
        0x00, 0x0C, 0x33, 0x30, 0x00, 0x0C, 0x33, 0x30, 0x00, 0x0C, 0x33, 0x30, 0x00, 0x0C, 0x33, 0x30,
        0x00, 0x0C, 0x33, 0x30, 0x00, 0x0C, 0x33, 0x30, 0x00, 0x03, 0xC3, 0x30, 0x00, 0x03, 0xC3, 0x30,
        0x00, 0x0C, 0x00, 0xC0, 0x00, 0x0C, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'h'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x03, 0xFF, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'i'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0xCF, 0xFF, 0x00, 0x00, 0xCF, 0xFF, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'j'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0,
        0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x30,
        0x00, 0x0C, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x30, 0x00, 0xCF, 0xFF, 0xC0, 0x00, 0xCF, 0xFF, 0xC0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'k'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00,
        0x00, 0x03, 0x30, 0x00, 0x00, 0x03, 0x30, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'l'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'm'
    [
        0x00, 0x0F, 0xFF, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x03, 0xFF, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'n'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x0F, 0xFF, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x03, 0xFF, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'o'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x03, 0xFC, 0x00, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'p'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0xF0, 0x00, 0x0F, 0xFF, 0xF0,
        0x00, 0x03, 0x30, 0x00, 0x00, 0x03, 0x30, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00,
        0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00,
        0x00, 0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'q'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xF0, 0x00, 0x00, 0x03, 0xF0, 0x00,
        0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00,
        0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x03, 0x30, 0x00, 0x00, 0x03, 0x30, 0x00,
        0x00, 0x0F, 0xFF, 0xF0, 0x00, 0x0F, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'r'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x03, 0xFF, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 's'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00,
        0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00,
        0x00, 0x0C, 0x33, 0x00, 0x00, 0x0C, 0x33, 0x00, 0x00, 0x0C, 0x33, 0x00, 0x00, 0x0C, 0x33, 0x00,
        0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 't'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00,
        0x00, 0xFF, 0xFC, 0x00, 0x00, 0xFF, 0xFC, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'u'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xFC, 0x00, 0x00, 0x0F, 0xFC, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x0F, 0xFC, 0x00, 0x00, 0x0F, 0xFC, 0x00,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'v'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x00, 0x00, 0x0F, 0xC0, 0x00,
        0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x0F, 0xC0, 0x00, 0x00, 0x0F, 0xC0, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'w'
    [
        0x00, 0x0F, 0xFC, 0x00, 0x00, 0x0F, 0xFC, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
        0x00, 0x0F, 0xFC, 0x00, 0x00, 0x0F, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'x'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00,
        0x00, 0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00, 0x03, 0x0C, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'y'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xF0, 0xC0, 0x00, 0x0F, 0xF0, 0xC0,
        0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30,
        0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x0C, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30,
        0x00, 0x0F, 0xFF, 0xC0, 0x00, 0x0F, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'z'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00,
        0x00, 0x0C, 0x0F, 0x00, 0x00, 0x0C, 0x0F, 0x00, 0x00, 0x0C, 0x33, 0x00, 0x00, 0x0C, 0x33, 0x00,
        0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0C, 0xC3, 0x00, 0x00, 0x0F, 0x03, 0x00, 0x00, 0x0F, 0x03, 0x00,
        0x00, 0x0C, 0x03, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '{'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0xF3, 0x3C, 0x00, 0x00, 0xF3, 0x3C, 0x00,
        0x03, 0x0C, 0xC3, 0x00, 0x03, 0x0C, 0xC3, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '|'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x00, 0x03, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '}'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
        0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x0C, 0xC3, 0x00, 0x03, 0x0C, 0xC3, 0x00,
        0x00, 0xF3, 0x3C, 0x00, 0x00, 0xF3, 0x3C, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '~'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00,
        0x00, 0x30, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x03, 0xC0, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];
