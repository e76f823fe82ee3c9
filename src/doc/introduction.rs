/*!
# Introductory Tutorial for tinyboot

A tinyboot program is read twice. The first pass lays out data space,
binds names, and finds the partner of every bracket. The second pass
starts at the `^` and executes the same text one byte at a time.

Let's print a single letter. Save this as `a.tb`.

```text
b 65 ^ 0 1 W Q
```

`b 65` puts the byte 65 at address 0 of data space. Everything after
`^` runs. `0 1` pushes an address and a count, `W` writes that range
to standard output, and `Q` stops the program.

<pre><code>&nbsp;$ tinyboot a.tb
&nbsp;writing address 0, count 1
&nbsp;A
</code></pre>

The `writing` line goes to standard error, so redirect it away when you
only want the program's output.

Names are single bytes. `v` names the current end of data space and
`:` names the code that follows. Using the name later pushes the
address or calls the code.

```text
( print the byte at n, then one more )
v n # 72
: p n 1 W ;
^ p n @ 1 + n s p Q
```

`(` starts a comment that ends at the next `)`. Comments do not nest
and may contain anything except `)`.

Conditionals and loops use brackets. `[` pops a value and skips to the
matching `]` when it is zero. `}` pops a value and goes back to the
matching `{` when it is not zero, so a loop body always runs once.

```text
( count down from 3 )
v n # 3
^ { n @ 4294967295 + n ! n @ } Q
```

Numbers are unsigned decimal in the source and signed 32-bit on the
stack, so `4294967295` is -1. Use the `--trace` option to watch every
instruction and `--dump` to see the stacks after an error.
*/
