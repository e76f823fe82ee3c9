/*!
# Instruction Reference

## Directives

Directives are only acted on by the compile pass. Executing one is an
`UNHANDLED INSTRUCTION` error.

| Byte | Operand | Effect |
|------|---------|--------|
| `(`  | text to `)` | Comment. Also skipped at run time. |
| `v`  | name | Bind name to the current data length. |
| `:`  | name | Bind name to the text after the name. |
| `b`  | number | Append one byte. Must be at most 255. |
| `#`  | number | Append a 32-bit little-endian word. |
| `*`  | number | Append that many zero bytes. |
| `^`  | | Execution starts here. The last one wins. |

## Instructions

| Byte | Stack | Effect |
|------|-------|--------|
| `0`-`9` | `-- n` | Push a decimal literal. |
| `+`  | `a b -- a+b` | Wrapping add. |
| `~`  | `a -- !a` | Bitwise not. |
| `<`  | `a b -- f` | 1 if a < b signed, else 0. |
| `@`  | `addr -- n` | Fetch a 32-bit word. |
| `!`  | `n addr --` | Store a 32-bit word. |
| `s`  | `n addr --` | Store the low byte of n. |
| `W`  | `addr count --` | Write bytes to output. |
| `G`  | `-- byte` | Read a byte, or -1 at end of input. |
| `[`  | `f --` | Skip to `]` when f is zero. |
| `]`  | | No effect. |
| `{`  | | No effect. |
| `}`  | `f --` | Back to `{` when f is not zero. |
| `;`  | | Return from a call. |
| `Q`  | | Stop. |

A byte bound with `v` or `:` replaces its builtin meaning at run time.
The compile pass still treats directive bytes as directives.

## Errors

Every error prints as its name, then the address and byte where it
happened when known, then the source text leading up to it.

```text
STACK UNDERFLOW AT 4 ('+'); IN ADD; after "^ 1 +"
```

CTRL-C stops a program even while `G` is waiting for input.

An interrupted program reports `BREAK` and exits with status 130.
Other errors exit with status 1.
*/
